//! Batch driver integration tests

use fnol_domain::Route;
use fnol_engine::{
    sample_documents, BatchConfig, BatchProcessor, ClaimsProcessor, Document, DocumentOutcome,
    TriageConfig,
};
use std::sync::Arc;

fn batch(config: BatchConfig) -> BatchProcessor {
    let processor = Arc::new(ClaimsProcessor::new(TriageConfig::default()).unwrap());
    BatchProcessor::new(processor, config).unwrap()
}

#[tokio::test]
async fn test_samples_route_as_expected() {
    let report = batch(BatchConfig::default())
        .process_documents(sample_documents())
        .await;

    let routes: Vec<Route> = report.records().map(|r| r.recommended_route).collect();
    assert_eq!(
        routes,
        vec![
            Route::FastTrack,
            Route::ManualReview,
            Route::InvestigationQueue
        ]
    );

    let metrics = report.metrics();
    assert_eq!(metrics.documents_processed, 3);
    assert_eq!(metrics.documents_failed, 0);
    assert_eq!(metrics.total_missing_fields, 1);
    assert_eq!(metrics.total_flags, 5);
}

#[tokio::test]
async fn test_degenerate_documents_do_not_disturb_others() {
    let mut documents = sample_documents();
    documents.insert(1, Document::new("empty.txt", ""));
    documents.insert(3, Document::new("binary.txt", "\u{0}\u{1}\u{fffd}\u{fffd}"));

    let report = batch(BatchConfig {
        max_workers: 2,
        timeout_per_document_secs: 5,
    })
    .process_documents(documents)
    .await;

    assert_eq!(report.len(), 5);
    let names: Vec<&str> = report.outcomes.iter().map(|o| o.document_name()).collect();
    assert_eq!(
        names,
        vec![
            "Claim_001_Auto_Damage.txt",
            "empty.txt",
            "Claim_002_Injury.txt",
            "binary.txt",
            "Claim_003_Suspicious.txt",
        ]
    );

    match &report.outcomes[1] {
        DocumentOutcome::Processed(record) => {
            assert_eq!(record.recommended_route, Route::ManualReview);
            assert_eq!(record.missing_fields.len(), 8);
        }
        DocumentOutcome::Failed(failure) => panic!("unexpected failure: {:?}", failure),
    }
    assert_eq!(report.records().count(), 5);
}

#[tokio::test]
async fn test_single_worker_processes_everything() {
    let documents: Vec<Document> = (0..25)
        .map(|i| Document::new(format!("n{}.txt", i), format!("Estimated Damage: ${}", i * 1000)))
        .collect();

    let report = batch(BatchConfig {
        max_workers: 1,
        ..BatchConfig::default()
    })
    .process_documents(documents)
    .await;

    assert_eq!(report.records().count(), 25);
    for (i, record) in report.records().enumerate() {
        assert_eq!(record.extracted_fields.estimated_damage, Some(i as f64 * 1000.0));
    }
}

#[test]
fn test_invalid_batch_config_is_rejected() {
    let processor = Arc::new(ClaimsProcessor::new(TriageConfig::default()).unwrap());
    let result = BatchProcessor::new(
        processor,
        BatchConfig {
            max_workers: 0,
            ..BatchConfig::default()
        },
    );
    assert!(result.is_err());
}
