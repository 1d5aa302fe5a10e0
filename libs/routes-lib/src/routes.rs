use serde::Serialize;

use crate::errors::RouteError;
use crate::resource::Resource;
use crate::template::RouteTemplate;

// Resource roots. Every template under a resource is built on its root.
macro_rules! user_root {
    () => {
        ""
    };
}

macro_rules! account_root {
    () => {
        ""
    };
}

macro_rules! transaction_root {
    () => {
        ""
    };
}

pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoutes {
    pub root: &'static str,
    pub create_user: &'static str,
    pub me: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRoutes {
    pub root: &'static str,
    pub create_account: &'static str,
    pub balance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRoutes {
    pub root: &'static str,
    pub transfer: &'static str,
}

/// Named path templates for every resource of one API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    pub version: &'static str,
    pub user: UserRoutes,
    pub account: AccountRoutes,
    pub transaction: TransactionRoutes,
}

pub const ROUTES_V1: RouteTable = RouteTable {
    version: API_VERSION,
    user: UserRoutes {
        root: user_root!(),
        create_user: concat!(user_root!(), "/user"),
        me: concat!(user_root!(), "/me"),
    },
    account: AccountRoutes {
        root: account_root!(),
        create_account: concat!(account_root!(), "/accounts"),
        balance: concat!(account_root!(), "/accounts/:id/balance"),
    },
    transaction: TransactionRoutes {
        root: transaction_root!(),
        transfer: concat!(transaction_root!(), "/transactions/transfer"),
    },
};

/// One named template of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub resource: Resource,
    pub name: &'static str,
    pub template: RouteTemplate,
}

impl RouteEntry {
    /// `resource.name`, e.g. `account.balance`.
    pub fn dotted_name(&self) -> String {
        format!("{}.{}", self.resource, self.name)
    }
}

impl RouteTable {
    pub fn root(&self, resource: Resource) -> &'static str {
        match resource {
            Resource::User => self.user.root,
            Resource::Account => self.account.root,
            Resource::Transaction => self.transaction.root,
        }
    }

    /// Every template in table order. Roots are not included.
    pub fn entries(&self) -> [RouteEntry; 5] {
        let entry = |resource: Resource, name: &'static str, template: &'static str| RouteEntry {
            resource,
            name,
            template: RouteTemplate::new(template),
        };

        [
            entry(Resource::User, "createUser", self.user.create_user),
            entry(Resource::User, "me", self.user.me),
            entry(Resource::Account, "createAccount", self.account.create_account),
            entry(Resource::Account, "balance", self.account.balance),
            entry(Resource::Transaction, "transfer", self.transaction.transfer),
        ]
    }

    /// Resolves a dotted name such as `account.balance` or `user.root`.
    pub fn lookup(&self, dotted: &str) -> Result<RouteTemplate, RouteError> {
        let (resource, name) = dotted
            .split_once('.')
            .ok_or_else(|| RouteError::UnknownRoute(dotted.to_string()))?;
        let resource: Resource = resource.parse()?;

        if name == "root" {
            return Ok(RouteTemplate::new(self.root(resource)));
        }

        self.entries()
            .into_iter()
            .find(|e| e.resource == resource && e.name == name)
            .map(|e| e.template)
            .ok_or_else(|| RouteError::UnknownRoute(dotted.to_string()))
    }
}
