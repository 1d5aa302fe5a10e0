use routes_lib::{AccountRoutes, RouteEntry, RouteTable, TransactionRoutes, UserRoutes};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRoutesResponse {
    pub root: String,
    pub create_user: String,
    pub me: String,
}

impl From<UserRoutes> for UserRoutesResponse {
    fn from(routes: UserRoutes) -> Self {
        UserRoutesResponse {
            root: routes.root.to_string(),
            create_user: routes.create_user.to_string(),
            me: routes.me.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRoutesResponse {
    pub root: String,
    pub create_account: String,
    pub balance: String,
}

impl From<AccountRoutes> for AccountRoutesResponse {
    fn from(routes: AccountRoutes) -> Self {
        AccountRoutesResponse {
            root: routes.root.to_string(),
            create_account: routes.create_account.to_string(),
            balance: routes.balance.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRoutesResponse {
    pub root: String,
    pub transfer: String,
}

impl From<TransactionRoutes> for TransactionRoutesResponse {
    fn from(routes: TransactionRoutes) -> Self {
        TransactionRoutesResponse {
            root: routes.root.to_string(),
            transfer: routes.transfer.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteTableResponse {
    pub version: String,
    pub user: UserRoutesResponse,
    pub account: AccountRoutesResponse,
    pub transaction: TransactionRoutesResponse,
}

impl From<RouteTable> for RouteTableResponse {
    fn from(table: RouteTable) -> Self {
        RouteTableResponse {
            version: table.version.to_string(),
            user: table.user.into(),
            account: table.account.into(),
            transaction: table.transaction.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntryResponse {
    pub resource: String,
    pub name: String,
    /// Dotted lookup key, e.g. `account.balance`
    pub key: String,
    pub template: String,
    /// The template in axum `{param}` syntax
    pub axum_path: String,
    pub params: Vec<String>,
}

impl From<RouteEntry> for RouteEntryResponse {
    fn from(entry: RouteEntry) -> Self {
        RouteEntryResponse {
            resource: entry.resource.to_string(),
            name: entry.name.to_string(),
            key: entry.dotted_name(),
            template: entry.template.to_string(),
            axum_path: entry.template.to_axum_path(),
            params: entry.template.params().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResolvedRouteResponse {
    pub name: String,
    pub template: String,
    pub path: String,
}
