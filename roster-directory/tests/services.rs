use pretty_assertions::assert_eq;
use roster_core::{ErrorKind, RosterConfig, RosterError, RosterService};
use roster_directory::{
    client_from_form, seed, subscription_from_form, Directory, ListParams, SubscriptionParams,
};
use roster_query::{FilterQuery, ListQuery, SortSpec};
use serde_json::json;

fn new_client() -> roster_directory::Client {
    client_from_form(&json!({
        "name": "Elena Ruiz",
        "clientId": "CLI-2024-007",
        "company": "Ruiz Digital",
        "email": "elena@ruiz.es",
        "city": "Bilbao",
        "status": "cliente-activo"
    }))
    .unwrap()
}

#[tokio::test]
async fn created_client_is_listed_and_searchable() {
    let dir = Directory::new().unwrap();
    let clients = dir.clients();

    let created = clients
        .create(new_client(), ListParams::default())
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let page = clients
        .find(
            ListQuery {
                filter: FilterQuery::new().search("bilbao"),
                ..ListQuery::default()
            }
            .into(),
        )
        .await
        .unwrap();
    assert_eq!(page.items, vec![created.clone()]);

    let all = clients.find(ListParams::default()).await.unwrap();
    assert_eq!(all.total_items, 7);
    assert_eq!(all.items.last(), Some(&created));
}

#[tokio::test]
async fn duplicate_id_conflicts() {
    let dir = Directory::new().unwrap();
    let mut dup = new_client();
    dup.id = "1".into();

    let err = dir
        .clients()
        .create(dup, ListParams::default())
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::Conflict);
}

#[tokio::test]
async fn invalid_record_is_unprocessable() {
    let dir = Directory::new().unwrap();
    let mut bad = new_client();
    bad.name.clear();
    bad.email.clear();

    let err = dir
        .clients()
        .create(bad, ListParams::default())
        .await
        .unwrap_err();

    let roster = RosterError::from_anyhow(&err).unwrap();
    assert_eq!(roster.kind, ErrorKind::Unprocessable);
    let errors = roster.errors.as_ref().unwrap();
    assert_eq!(errors["name"][0], "is required");
    assert_eq!(errors["email"][0], "is required");
}

#[tokio::test]
async fn update_keeps_id_and_remove_deletes() {
    let dir = Directory::new().unwrap();
    let employees = dir.employees();

    let mut sofia = employees.get("1", ListParams::default()).await.unwrap();
    sofia.is_active = true;
    sofia.id = "ignored".into();

    let updated = employees
        .update("1", sofia, ListParams::default())
        .await
        .unwrap();
    assert_eq!(updated.id, "1");
    assert!(employees.get("1", ListParams::default()).await.unwrap().is_active);

    employees.remove("1", ListParams::default()).await.unwrap();
    let err = employees
        .get("1", ListParams::default())
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::NotFound);

    let err = employees
        .remove("missing", ListParams::default())
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::NotFound);
}

#[tokio::test]
async fn read_only_directory_rejects_writes() {
    let mut config = RosterConfig::new();
    config.set("directory.read_only", "true");
    let dir = Directory::with_config(config).unwrap();

    let page = dir.clients().find(ListParams::default()).await.unwrap();
    assert_eq!(page.total_items, 6);

    let err = dir
        .clients()
        .create(new_client(), ListParams::default())
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::MethodNotAllowed);

    let err = dir
        .employees()
        .remove("1", ListParams::default())
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::MethodNotAllowed);
}

#[tokio::test]
async fn empty_store_yields_empty_page() {
    let dir =
        Directory::with_records(RosterConfig::new(), vec![], seed::employees(), vec![]).unwrap();

    let page = dir.clients().find(ListParams::default()).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!((page.total_items, page.total_pages), (0, 0));
    assert_eq!((page.first_item(), page.last_item()), (0, 0));
}

#[tokio::test]
async fn subscriptions_are_scoped_to_their_client() {
    let dir = Directory::new().unwrap();
    let subs = dir.subscriptions();

    let mine = subs
        .find(SubscriptionParams::for_client("1"))
        .await
        .unwrap();
    assert_eq!(mine.total_items, 5);

    let theirs = subs
        .find(SubscriptionParams::for_client("2"))
        .await
        .unwrap();
    assert_eq!(theirs.total_items, 0);

    let err = subs
        .get("1", SubscriptionParams::for_client("2"))
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::NotFound);

    let err = subs
        .remove("1", SubscriptionParams::for_client("2"))
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::NotFound);
}

#[tokio::test]
async fn new_subscription_takes_scope_from_params() {
    let dir = Directory::new().unwrap();
    let subs = dir.subscriptions();

    let mut form = subscription_from_form(&json!({
        "platform": "Filmin",
        "plan": "Plan Anual",
        "startDate": "2025-01-01",
        "endDate": "2026-01-01",
        "amount": "6,99"
    }))
    .unwrap();
    form.client_id = "1".into();

    let created = subs
        .create(form, SubscriptionParams::for_client("3"))
        .await
        .unwrap();
    assert_eq!(created.client_id, "3");

    let page = subs
        .find(SubscriptionParams::for_client("3"))
        .await
        .unwrap();
    assert_eq!(page.items, vec![created]);
}

#[tokio::test]
async fn subscriptions_filter_and_sort_within_scope() {
    let dir = Directory::new().unwrap();

    let params = SubscriptionParams::for_client("1").with_query(ListQuery {
        filter: FilterQuery::new().with_filter("status", "caducada"),
        sort: Some(SortSpec::asc("platform")),
        ..ListQuery::default()
    });
    let page = dir.subscriptions().find(params).await.unwrap();

    let platforms: Vec<_> = page.items.iter().map(|s| s.platform.as_str()).collect();
    assert_eq!(platforms, vec!["Spotify Premium", "YouTube Premium"]);
}

#[tokio::test]
async fn read_only_wins_over_validation() {
    let mut config = RosterConfig::new();
    config.set("directory.read_only", "true");
    let dir = Directory::with_config(config).unwrap();

    let mut bad = new_client();
    bad.name.clear();
    let err = dir
        .clients()
        .create(bad.clone(), ListParams::default())
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::MethodNotAllowed);

    let err = dir
        .clients()
        .update("1", bad, ListParams::default())
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::MethodNotAllowed);

    let mut sub = seed::subscriptions().remove(0);
    sub.plan.clear();
    let err = dir
        .subscriptions()
        .create(sub, SubscriptionParams::for_client("1"))
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::MethodNotAllowed);
}

#[tokio::test]
async fn foreign_subscription_writes_leave_the_row_alone() {
    let dir = Directory::new().unwrap();
    let subs = dir.subscriptions();
    let original = subs
        .get("1", SubscriptionParams::for_client("1"))
        .await
        .unwrap();

    let mut changed = original.clone();
    changed.plan = "Plan Básico".into();
    let err = subs
        .update("1", changed.clone(), SubscriptionParams::for_client("2"))
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::NotFound);

    let err = subs
        .remove("1", SubscriptionParams::for_client("2"))
        .await
        .unwrap_err();
    assert_eq!(RosterError::kind_of(&err), ErrorKind::NotFound);

    let stored = subs
        .get("1", SubscriptionParams::for_client("1"))
        .await
        .unwrap();
    assert_eq!(stored, original);

    let updated = subs
        .update("1", changed, SubscriptionParams::for_client("1"))
        .await
        .unwrap();
    assert_eq!(updated.plan, "Plan Básico");
    assert_eq!(updated.client_id, "1");
}
