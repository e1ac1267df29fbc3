use taxpayer_records::browser::{Column, Field, Outcome, RecordBrowser, RecordTable};
use taxpayer_records::clients::RecordService;
use taxpayer_records::config::ServiceConfig;
use taxpayer_records::lifecycle::RecordSystem;
use taxpayer_records::model::{TaxRecordCreate, Tid};
use taxpayer_records::record_actor::ServiceError;

fn seed() -> Vec<TaxRecordCreate> {
    vec![
        TaxRecordCreate::new("Ada", "Lovelace", "12 St James's Sq"),
        TaxRecordCreate::new("Alan", "Turing", "2 Adlington Rd"),
    ]
}

#[tokio::test]
async fn test_full_browsing_session() {
    let system = RecordSystem::new(&ServiceConfig::default());
    let tids = system.seed(&seed()).await.unwrap();
    assert_eq!(tids, vec![Tid::new(1), Tid::new(2)]);

    let mut browser = RecordBrowser::new(system.record_client.clone());
    assert_eq!(browser.mount().await, Outcome::Completed);
    assert_eq!(browser.records().len(), 2);

    browser.set_field(Field::FirstName, "Grace");
    browser.set_field(Field::LastName, "Hopper");
    browser.set_field(Field::Address, "9 Navy Way");
    assert_eq!(browser.submit().await, Outcome::Completed);
    assert_eq!(browser.records().len(), 3);
    assert_eq!(browser.form().value(Field::FirstName), "");

    browser.set_search_text("3");
    assert_eq!(browser.search().await, Outcome::Completed);
    assert_eq!(browser.records().len(), 1);
    assert_eq!(browser.records()[0].first_name, "Grace");
    assert_eq!(browser.records()[0].tid, Tid::new(3));

    browser.set_search_text("999");
    assert_eq!(browser.search().await, Outcome::Completed);
    assert!(browser.records().is_empty());

    assert_eq!(browser.show_all().await, Outcome::Completed);
    assert_eq!(browser.records().len(), 3);
    assert!(!browser.is_loading());

    drop(browser);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_service_rejects_blank_fields() {
    let system = RecordSystem::new(&ServiceConfig::default());
    let client = system.record_client.clone();

    let err = client.add("Jane", "", "1 Main St").await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(client.list_all().await.unwrap().is_empty());

    // Whitespace is a value, not a blank.
    let tid = client.add(" ", "Doe", "1 Main St").await.unwrap();
    assert_eq!(client.find_by_id(tid).await.unwrap().map(|r| r.last_name), Some("Doe".into()));

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_first_tid_and_sorted_view() {
    let config = ServiceConfig {
        first_tid: 100,
        ..ServiceConfig::default()
    };
    let system = RecordSystem::new(&config);
    system.seed(&seed()).await.unwrap();

    let mut browser = RecordBrowser::new(system.record_client.clone());
    browser.mount().await;

    let mut table = RecordTable::default();
    table.sort_by(Column::Tid);
    table.sort_by(Column::Tid);
    let page = table.page_of(browser.records());
    let tids: Vec<u64> = page.rows.iter().map(|r| r.tid.get()).collect();
    assert_eq!(tids, vec![101, 100]);

    drop(browser);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_stops_at_first_invalid_record() {
    let system = RecordSystem::new(&ServiceConfig::default());
    let records = vec![
        TaxRecordCreate::new("Ada", "Lovelace", "12 St James's Sq"),
        TaxRecordCreate::new("", "Nobody", "Nowhere"),
        TaxRecordCreate::new("Alan", "Turing", "2 Adlington Rd"),
    ];

    assert!(system.seed(&records).await.is_err());
    let stored = system.record_client.list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].first_name, "Ada");

    system.shutdown().await.unwrap();
}
