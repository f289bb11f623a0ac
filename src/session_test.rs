use super::*;

fn principal(id: &str) -> Principal {
    Principal {
        id: id.to_owned(),
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        full_name: None,
    }
}

#[test]
fn save_then_load_round_trips_principal_and_token() {
    let store = MemoryStore::default();
    save_session(&store, Variant::User, &principal("u1"), Some("tok-1"));

    let loaded = load_principal(&store, Variant::User).unwrap();
    assert_eq!(loaded.id, "u1");
    assert_eq!(load_token(&store, Variant::User).as_deref(), Some("tok-1"));
}

#[test]
fn variants_use_disjoint_keys() {
    let store = MemoryStore::default();
    save_session(&store, Variant::User, &principal("u1"), Some("user-tok"));
    save_session(&store, Variant::Admin, &principal("a1"), Some("admin-tok"));

    assert_eq!(load_principal(&store, Variant::User).unwrap().id, "u1");
    assert_eq!(load_principal(&store, Variant::Admin).unwrap().id, "a1");
    assert_eq!(load_token(&store, Variant::User).as_deref(), Some("user-tok"));
    assert_eq!(load_token(&store, Variant::Admin).as_deref(), Some("admin-tok"));
}

#[test]
fn clear_session_only_touches_its_variant() {
    let store = MemoryStore::default();
    save_session(&store, Variant::User, &principal("u1"), Some("user-tok"));
    save_session(&store, Variant::Admin, &principal("a1"), Some("admin-tok"));

    clear_session(&store, Variant::User);

    assert!(load_principal(&store, Variant::User).is_none());
    assert!(load_token(&store, Variant::User).is_none());
    assert_eq!(load_principal(&store, Variant::Admin).unwrap().id, "a1");
}

#[test]
fn corrupt_principal_reads_as_absent() {
    let store = MemoryStore::default();
    store.set(Variant::User.principal_key(), "{not json");
    assert!(load_principal(&store, Variant::User).is_none());
}

#[test]
fn saving_without_token_drops_stale_token() {
    let store = MemoryStore::default();
    save_session(&store, Variant::User, &principal("u1"), Some("old-tok"));
    save_session(&store, Variant::User, &principal("u1"), None);
    assert!(load_token(&store, Variant::User).is_none());
}
