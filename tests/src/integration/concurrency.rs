//! # Concurrency Tests
//!
//! Racing buyers on a multi-threaded runtime. Commands on one name must
//! serialize; commands on different names must not block each other.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ns_registry::{Ledger, RegistryApi, RegistryConfig, RegistryError};
    use tokio::sync::Barrier;

    use crate::integration::fixtures::{addr, buy, coins, funded_service, MemoryService};

    async fn race(service: Arc<MemoryService>, commands: Vec<ns_registry::Command>) -> Vec<Result<(), RegistryError>> {
        let barrier = Arc::new(Barrier::new(commands.len()));
        let mut handles = Vec::with_capacity(commands.len());

        for command in commands {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                tokio::task::spawn_blocking(move || service.execute(command).map(|_| ()))
                    .await
                    .unwrap()
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await.unwrap());
        }
        results
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_price_race_has_one_winner() {
        let buyers: Vec<u8> = (1..=8).collect();
        let service = Arc::new(funded_service(&buyers, "100token", RegistryConfig::default()));
        service.execute(buy("alice", "10token", 0xA0)).unwrap();

        let commands = buyers.iter().map(|b| buy("alice", "15token", *b)).collect();
        let results = race(Arc::clone(&service), commands).await;

        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, RegistryError::BidTooLow { .. })));

        // Exactly one buyer paid, and the previous owner got exactly one bid.
        let paid = buyers
            .iter()
            .filter(|b| service.ledger().balance(&addr(**b)) == coins("85token"))
            .count();
        assert_eq!(paid, 1);
        assert_eq!(service.ledger().balance(&addr(0xA0)), coins("15token"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_unclaimed_name_race_has_one_owner() {
        let buyers: Vec<u8> = (1..=8).collect();
        let service = Arc::new(funded_service(&buyers, "100token", RegistryConfig::default()));

        let commands = buyers.iter().map(|b| buy("fresh", "5token", *b)).collect();
        let results = race(Arc::clone(&service), commands).await;

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let owner = service.get_entry("fresh").unwrap().owner;
        assert!(buyers.iter().any(|b| addr(*b) == owner));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_different_names_all_succeed() {
        let buyers: Vec<u8> = (1..=16).collect();
        let service = Arc::new(funded_service(&buyers, "100token", RegistryConfig::default()));

        let commands = buyers
            .iter()
            .map(|b| buy(&format!("name-{}", b), "7token", *b))
            .collect();
        let results = race(Arc::clone(&service), commands).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(service.list_names().unwrap().len(), buyers.len());
        for b in &buyers {
            assert_eq!(
                service.get_entry(&format!("name-{}", b)).unwrap().owner,
                addr(*b)
            );
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_escalating_bids_end_at_highest() {
        let buyers: Vec<u8> = (1..=10).collect();
        let service = Arc::new(funded_service(&buyers, "1000token", RegistryConfig::default()));
        let supply = service.ledger().total_supply().unwrap();

        let commands = buyers
            .iter()
            .map(|b| buy("alice", &format!("{}token", u32::from(*b) * 10), *b))
            .collect();
        race(Arc::clone(&service), commands).await;

        // Whatever the interleaving, the highest bid can never be refused.
        let entry = service.get_entry("alice").unwrap();
        assert_eq!(entry.owner, addr(10));
        assert_eq!(entry.price, coins("100token"));
        assert_eq!(service.ledger().total_supply().unwrap(), supply);
    }
}
