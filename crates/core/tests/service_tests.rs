// ═══════════════════════════════════════════════════════════════════
// Service Tests — HistoryService, AnalyticsService
// ═══════════════════════════════════════════════════════════════════

use profitbook_core::errors::CoreError;
use profitbook_core::models::investment::StockInvestment;
use profitbook_core::models::portfolio::Portfolio;
use profitbook_core::models::settings::EditorSettings;
use profitbook_core::models::snapshot::SnapshotHistory;
use profitbook_core::services::analytics_service::AnalyticsService;
use profitbook_core::services::history_service::HistoryService;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

// ═══════════════════════════════════════════════════════════════════
// HistoryService
// ═══════════════════════════════════════════════════════════════════

mod history_service {
    use super::*;

    #[test]
    fn current_text_of_fresh_history_is_empty() {
        let svc = HistoryService::new();
        let h = SnapshotHistory::default();
        assert_eq!(svc.current_text(&h), "");
        assert!(!svc.can_undo(&h));
    }

    #[test]
    fn current_text_of_history_without_snapshots_is_empty() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::default();
        h.snapshots.clear();
        assert_eq!(svc.current_text(&h), "");
        assert!(svc.undo_last(&mut h).is_none());
    }

    #[test]
    fn append_concatenates_onto_latest() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::default();
        let snap = svc.append(&mut h, "Hello").unwrap();
        assert_eq!(snap.text, "Hello");
        assert_eq!(snap.position, 1);
        let snap = svc.append(&mut h, " World").unwrap();
        assert_eq!(snap.text, "Hello World");
        assert_eq!(snap.position, 2);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn each_snapshot_keeps_full_document() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::default();
        for s in ["a", "b", "c"] {
            svc.append(&mut h, s).unwrap();
        }
        let texts: Vec<&str> = h.snapshots.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["", "a", "ab", "abc"]);
    }

    #[test]
    fn append_empty_text_still_records_snapshot() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::default();
        svc.append(&mut h, "").unwrap();
        assert_eq!(h.len(), 2);
        assert!(svc.can_undo(&h));
    }

    #[test]
    fn n_inserts_then_undo() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::default();
        let parts = ["one ", "two ", "three ", "four"];
        for p in parts {
            svc.append(&mut h, p).unwrap();
        }
        assert_eq!(svc.current_text(&h), parts.concat());
        let reverted = svc.undo_last(&mut h).map(str::to_owned);
        assert_eq!(reverted.as_deref(), Some("one two three "));
        assert_eq!(svc.current_text(&h), parts[..3].concat());
    }

    #[test]
    fn undo_stops_at_initial_snapshot() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::default();
        svc.append(&mut h, "x").unwrap();
        assert_eq!(svc.undo_last(&mut h), Some(""));
        assert_eq!(h.len(), 1);
        assert_eq!(svc.undo_last(&mut h), None);
        assert_eq!(h.len(), 1);
        assert_eq!(svc.current_text(&h), "");
    }

    #[test]
    fn append_at_exact_capacity_succeeds() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::new(&EditorSettings { capacity: 5 });
        svc.append(&mut h, "abc").unwrap();
        svc.append(&mut h, "de").unwrap();
        assert_eq!(svc.current_text(&h), "abcde");
    }

    #[test]
    fn append_over_capacity_leaves_history_unchanged() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::new(&EditorSettings { capacity: 5 });
        svc.append(&mut h, "abc").unwrap();
        match svc.append(&mut h, "def") {
            Err(CoreError::CapacityExceeded {
                capacity: 5,
                required: 6,
            }) => {}
            other => panic!("Expected CapacityExceeded, got {:?}", other),
        }
        assert_eq!(h.len(), 2);
        assert_eq!(svc.current_text(&h), "abc");
    }

    #[test]
    fn default_capacity_allows_999_bytes() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::default();
        svc.append(&mut h, &"x".repeat(999)).unwrap();
        match svc.append(&mut h, "y") {
            Err(CoreError::CapacityExceeded {
                capacity: 999,
                required: 1000,
            }) => {}
            other => panic!("Expected CapacityExceeded, got {:?}", other),
        }
    }

    #[test]
    fn capacity_counts_bytes() {
        let svc = HistoryService::new();
        let mut h = SnapshotHistory::new(&EditorSettings { capacity: 3 });
        // "é" is two bytes in UTF-8
        svc.append(&mut h, "é").unwrap();
        assert!(svc.append(&mut h, "é").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// AnalyticsService
// ═══════════════════════════════════════════════════════════════════

mod analytics_service {
    use super::*;

    fn portfolio(rows: &[(&str, i64, f64, f64)]) -> Portfolio {
        rows.iter()
            .map(|(n, id, b, s)| StockInvestment::new(*n, *id, *b, *s))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn percent_gain_positive_and_negative() {
        let svc = AnalyticsService::new();
        assert_close(
            svc.percent_gain(&StockInvestment::new("A", 1, 100.0, 110.0)).unwrap(),
            10.0,
        );
        assert_close(
            svc.percent_gain(&StockInvestment::new("B", 2, 50.0, 45.0)).unwrap(),
            -10.0,
        );
    }

    #[test]
    fn percent_gain_total_loss() {
        let svc = AnalyticsService::new();
        let gain = svc.percent_gain(&StockInvestment::new("A", 1, 20.0, 0.0)).unwrap();
        assert_close(gain, -100.0);
    }

    #[test]
    fn percent_gain_zero_buy_price_is_error() {
        let svc = AnalyticsService::new();
        match svc.percent_gain(&StockInvestment::new("Z", 9, 0.0, 5.0)) {
            Err(CoreError::InvalidBuyPrice { name, id, price }) => {
                assert_eq!(name, "Z");
                assert_eq!(id, 9);
                assert_eq!(price, 0.0);
            }
            other => panic!("Expected InvalidBuyPrice, got {:?}", other),
        }
    }

    #[test]
    fn average_of_gain_and_loss_is_zero() {
        let svc = AnalyticsService::new();
        let p = portfolio(&[("AAA", 1, 100.0, 110.0), ("BBB", 2, 50.0, 45.0)]);
        assert_close(svc.average_percent_gain(&p).unwrap(), 0.0);
    }

    #[test]
    fn average_is_mean_of_percentages_not_of_prices() {
        let svc = AnalyticsService::new();
        // +100% and +0%
        let p = portfolio(&[("A", 1, 1.0, 2.0), ("B", 2, 1000.0, 1000.0)]);
        assert_close(svc.average_percent_gain(&p).unwrap(), 50.0);
    }

    #[test]
    fn average_of_empty_portfolio_is_error() {
        let svc = AnalyticsService::new();
        assert!(matches!(
            svc.average_percent_gain(&Portfolio::default()),
            Err(CoreError::EmptyPortfolio)
        ));
    }

    #[test]
    fn average_with_zero_buy_price_is_error() {
        let svc = AnalyticsService::new();
        let p = portfolio(&[("AAA", 1, 100.0, 110.0), ("ZZZ", 2, 0.0, 45.0)]);
        assert!(matches!(
            svc.average_percent_gain(&p),
            Err(CoreError::InvalidBuyPrice { id: 2, .. })
        ));
    }

    #[test]
    fn summarize_breaks_down_per_record() {
        let svc = AnalyticsService::new();
        let p = portfolio(&[("AAA", 1, 100.0, 110.0), ("BBB", 2, 50.0, 45.0)]);
        let s = svc.summarize(&p).unwrap();
        assert_eq!(s.records, 2);
        assert_close(s.average_percent_gain, 0.0);
        assert_eq!(s.per_record.len(), 2);
        assert_eq!(s.per_record[0].name, "AAA");
        assert_close(s.per_record[0].percent_gain, 10.0);
        assert_eq!(s.per_record[1].id, 2);
        assert_close(s.per_record[1].percent_gain, -10.0);
    }

    #[test]
    fn summarize_empty_is_error() {
        let svc = AnalyticsService::new();
        assert!(matches!(
            svc.summarize(&Portfolio::default()),
            Err(CoreError::EmptyPortfolio)
        ));
    }
}
