use hostjar::cookies::{request_header, CookieJar, CookieRecord, CookieStore, CookieStoreConfig};
use std::collections::HashSet;
use url::Url;

fn cookie(name: &str, value: &str) -> CookieRecord {
    CookieRecord::new(name, value, "example.com")
}

fn pairs(cookies: &[CookieRecord]) -> Vec<(String, String)> {
    cookies
        .iter()
        .map(|c| (c.name.clone(), c.value.clone()))
        .collect()
}

#[test]
fn test_unset_host_is_absent() {
    let store = CookieStore::new();
    assert!(store.host_cookies("example.com").is_none());
    assert!(store
        .cookies(&Url::parse("https://example.com").unwrap())
        .is_empty());
}

#[test]
fn test_set_then_get_returns_exact_collection() {
    let store = CookieStore::new();
    let cookies = vec![
        cookie("a", "1").with_path("/"),
        cookie("b", "2").with_secure(true),
    ];

    store.set_host_cookies("example.com", cookies.clone());
    assert_eq!(store.host_cookies("example.com"), Some(cookies));
}

#[test]
fn test_second_set_replaces_when_pairs_differ() {
    let store = CookieStore::new();
    store.set_host_cookies("h", vec![cookie("a", "1"), cookie("b", "2")]);

    let replacement = vec![cookie("a", "9"), cookie("c", "3"), cookie("d", "4")];
    store.set_host_cookies("h", replacement.clone());
    assert_eq!(store.host_cookies("h"), Some(replacement));
}

#[test]
fn test_prefix_match_keeps_shorter_collection() {
    let store = CookieStore::new();
    store.set_host_cookies("h", vec![cookie("a", "1")]);
    store.set_host_cookies("h", vec![cookie("a", "1"), cookie("b", "2")]);

    assert_eq!(
        pairs(&store.host_cookies("h").unwrap()),
        vec![("a".to_string(), "1".to_string())]
    );
}

#[test]
fn test_strict_config_writes_longer_collection() {
    let store = CookieStore::with_config(CookieStoreConfig::strict());
    store.set_host_cookies("h", vec![cookie("a", "1")]);
    store.set_host_cookies("h", vec![cookie("a", "1"), cookie("b", "2")]);

    assert_eq!(store.host_cookies("h").unwrap().len(), 2);
}

#[test]
fn test_add_cookies_files_by_domain_host() {
    let store = CookieStore::new();
    let record = CookieRecord::new("s", "1", "https://x.com");

    let report = store.add_cookies(vec![record.clone()]);

    assert!(report.is_complete());
    assert_eq!(store.host_cookies("x.com"), Some(vec![record]));
}

#[test]
fn test_add_cookies_skips_unparseable_domain() {
    let store = CookieStore::new();
    let report = store.add_cookies(vec![
        CookieRecord::new("bad", "0", "https://exa mple.com"),
        CookieRecord::new("good", "1", "https://x.com"),
        CookieRecord::new("also-good", "2", "https://z.net"),
    ]);

    assert_eq!(report.added, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(store.host_count(), 2);
    assert!(store
        .all_cookies()
        .iter()
        .all(|c| c.name != "bad"));
}

#[test]
fn test_add_cookies_appends_in_order() {
    let store = CookieStore::new();
    store.add_cookies(vec![CookieRecord::new("a", "1", "https://x.com")]);
    store.add_cookies(vec![
        CookieRecord::new("b", "2", "https://x.com/path"),
        CookieRecord::new("c", "3", "http://x.com:8080"),
    ]);

    let names: Vec<_> = store
        .host_cookies("x.com")
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_all_cookies_across_hosts() {
    let store = CookieStore::new();
    store.set_host_cookies("a.com", vec![cookie("a", "1"), cookie("b", "2")]);
    store.set_host_cookies("b.com", vec![cookie("c", "3")]);

    let all: HashSet<_> = pairs(&store.all_cookies()).into_iter().collect();
    let expected: HashSet<_> = [("a", "1"), ("b", "2"), ("c", "3")]
        .into_iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect();
    assert_eq!(all, expected);
}

#[test]
fn test_clear_all_empties_store() {
    let store = CookieStore::new();
    let hosts = ["a.com", "b.com", "c.com"];
    for host in hosts {
        store.set_host_cookies(host, vec![cookie("k", host)]);
    }

    store.clear_all();

    assert!(store.all_cookies().is_empty());
    for host in hosts {
        assert!(store.host_cookies(host).is_none());
    }
}

#[test]
fn test_clear_removes_only_that_host() {
    let store = CookieStore::new();
    let a = Url::parse("https://a.com/x").unwrap();
    let b = Url::parse("https://b.com/y").unwrap();
    store.set_cookies(&a, vec![cookie("a", "1")]);
    store.set_cookies(&b, vec![cookie("b", "1")]);

    store.clear(&a);
    store.clear(&Url::parse("https://unknown.org").unwrap());

    assert!(store.cookies(&a).is_empty());
    assert_eq!(pairs(&store.cookies(&b)), vec![("b".to_string(), "1".to_string())]);
}

#[test]
fn test_cleared_host_can_be_set_again() {
    let store = CookieStore::new();
    store.set_host_cookies("h", vec![cookie("a", "1")]);
    store.clear_host("h");

    // No stored collection left to compare against.
    store.set_host_cookies("h", vec![cookie("a", "1"), cookie("b", "2")]);
    assert_eq!(store.host_cookies("h").unwrap().len(), 2);
}

#[test]
fn test_client_round_trip_with_parsed_cookies() {
    let store = CookieStore::new();
    let url = Url::parse("https://shop.example.com/checkout").unwrap();

    // What a client would do with its Set-Cookie lines.
    let received: Vec<CookieRecord> = ["cart=7; Path=/", "sid=abc; Secure; HttpOnly"]
        .iter()
        .map(|line| CookieRecord::from(cookie::Cookie::parse(*line).unwrap()))
        .collect();
    store.set_cookies(&url, received);

    let header = request_header(&store.cookies(&url)).unwrap();
    assert_eq!(header.to_str().unwrap(), "cart=7; sid=abc");
}

#[test]
fn test_export_as_json() {
    let store = CookieStore::new();
    store.set_host_cookies("a.com", vec![CookieRecord::new("a", "1", "a.com").with_path("/")]);

    let json = serde_json::to_string(&store.all_cookies()).unwrap();
    let back: Vec<CookieRecord> = serde_json::from_str(&json).unwrap();

    let fresh = CookieStore::new();
    let report = fresh.add_cookies(back);
    assert_eq!(report.added, 1);
    assert_eq!(fresh.host_cookies("a.com"), store.host_cookies("a.com"));
}
