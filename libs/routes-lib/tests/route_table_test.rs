use routes_lib::{join_path, Resource, RouteTable, ROUTES_V1};

#[test]
fn test_version_is_v1() {
    assert_eq!(ROUTES_V1.version, "v1");
}

#[test]
fn test_literal_templates() {
    assert_eq!(ROUTES_V1.user.create_user, "/user");
    assert_eq!(ROUTES_V1.user.me, "/me");
    assert_eq!(ROUTES_V1.account.create_account, "/accounts");
    assert_eq!(ROUTES_V1.account.balance, "/accounts/:id/balance");
    assert_eq!(ROUTES_V1.transaction.transfer, "/transactions/transfer");
}

#[test]
fn test_roots_are_empty() {
    for resource in Resource::ALL {
        assert_eq!(ROUTES_V1.root(resource), "");
    }
}

#[test]
fn test_balance_has_id_placeholder() {
    assert!(ROUTES_V1.account.balance.contains(":id"));
}

#[test]
fn test_table_is_stable_across_reads() {
    let first: RouteTable = ROUTES_V1;
    let second: RouteTable = ROUTES_V1;
    assert_eq!(first, second);
}

#[test]
fn test_balance_url_by_string_replace() {
    let url = format!(
        "{}{}",
        ROUTES_V1.account.root,
        ROUTES_V1.account.balance.replace(":id", "42")
    );
    assert_eq!(url, "/accounts/42/balance");
}

#[test]
fn test_balance_url_by_lookup() {
    let template = ROUTES_V1.lookup("account.balance").unwrap();
    let path = template.with_id(42).unwrap();
    assert_eq!(join_path(ROUTES_V1.account.root, &path), "/accounts/42/balance");
    assert_eq!(join_path("/v1", &path), "/v1/accounts/42/balance");
}

#[test]
fn test_every_entry_resolves_through_lookup() {
    for entry in ROUTES_V1.entries() {
        let found = ROUTES_V1.lookup(&entry.dotted_name()).unwrap();
        assert_eq!(found, entry.template);
    }
}

#[test]
fn test_only_balance_takes_params() {
    let with_params: Vec<String> = ROUTES_V1
        .entries()
        .iter()
        .filter(|e| e.template.has_params())
        .map(|e| e.dotted_name())
        .collect();
    assert_eq!(with_params, vec!["account.balance"]);
}

#[test]
fn test_serialized_shape_uses_camel_case() {
    let json = serde_json::to_value(ROUTES_V1).expect("Failed to serialize route table");

    assert_eq!(json["version"], "v1");
    assert_eq!(json["user"]["root"], "");
    assert_eq!(json["user"]["createUser"], "/user");
    assert_eq!(json["user"]["me"], "/me");
    assert_eq!(json["account"]["createAccount"], "/accounts");
    assert_eq!(json["account"]["balance"], "/accounts/:id/balance");
    assert_eq!(json["transaction"]["transfer"], "/transactions/transfer");
}

#[test]
fn test_every_value_is_a_string() {
    let json = serde_json::to_value(ROUTES_V1).expect("Failed to serialize route table");
    let table = json.as_object().unwrap();

    assert!(table["version"].is_string());
    for resource in Resource::ALL {
        let routes = table[resource.as_str()].as_object().unwrap();
        assert!(routes.values().all(|v| v.is_string()), "{resource} has a non-string value");
    }
}
