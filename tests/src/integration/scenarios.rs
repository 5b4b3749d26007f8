//! # Auction Scenarios
//!
//! Walks one name through claim, failed outbid, successful outbid,
//! unauthorized rebind, release and reclaim, then checks the engine's
//! properties over seeded random command sequences.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ns_registry::domain::invariants::invariant_unchanged;
    use ns_registry::{
        CommandPayload, Ledger, QueryResponse, RegistryApi, RegistryConfig, RegistryError,
        RegistryEvent, RegistryHandler, RegistryQuery, SubmitCommandRequest,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::integration::fixtures::{addr, buy, coins, delete, funded_service, set_value};

    const B1: u8 = 0xB1;
    const B2: u8 = 0xB2;
    const B3: u8 = 0xB3;

    // =============================================================================
    // SCENARIO WALKTHROUGH
    // =============================================================================

    #[test]
    fn test_full_auction_lifecycle() {
        let service = funded_service(&[B1, B2, B3], "100token", RegistryConfig::default());

        // A: claim an unclaimed name
        let receipt = service.execute(buy("alice", "10token", B1)).unwrap();
        let entry = receipt.outcome.entry().unwrap();
        assert_eq!(entry.owner, addr(B1));
        assert_eq!(entry.price, coins("10token"));

        // B: lower bid is refused and changes nothing
        let result = service.execute(buy("alice", "5token", B2));
        assert!(matches!(result, Err(RegistryError::BidTooLow { .. })));
        assert_eq!(service.get_entry("alice").unwrap().owner, addr(B1));

        // C: higher bid pays the previous owner
        service.execute(buy("alice", "15token", B2)).unwrap();
        assert_eq!(service.ledger().balance(&addr(B2)), coins("85token"));
        assert_eq!(service.ledger().balance(&addr(B1)), coins("115token"));
        let entry = service.get_entry("alice").unwrap();
        assert_eq!(entry.owner, addr(B2));
        assert_eq!(entry.price, coins("15token"));

        // D: the previous owner can no longer rebind
        let result = service.execute(set_value("alice", "hello", B1));
        assert!(matches!(result, Err(RegistryError::Unauthorized { .. })));

        // E: the owner releases the name
        service.execute(delete("alice", B2)).unwrap();
        assert!(matches!(
            service.get_entry("alice"),
            Err(RegistryError::NotFound { .. })
        ));

        // F: a released name is claimable at any positive price
        service.execute(buy("alice", "1token", B3)).unwrap();
        let entry = service.get_entry("alice").unwrap();
        assert_eq!(entry.owner, addr(B3));
        assert_eq!(entry.price, coins("1token"));
    }

    #[test]
    fn test_lifecycle_events() {
        let service = funded_service(&[B1, B2], "100token", RegistryConfig::default());

        let events: Vec<RegistryEvent> = [
            buy("alice", "10token", B1),
            set_value("alice", "hello", B1),
            buy("alice", "20token", B2),
            delete("alice", B2),
        ]
        .into_iter()
        .flat_map(|cmd| service.execute(cmd).unwrap().events)
        .collect();

        assert!(matches!(events[0], RegistryEvent::NameClaimed { .. }));
        assert!(matches!(events[1], RegistryEvent::ValueSet { .. }));
        assert!(matches!(events[2], RegistryEvent::NameSold { .. }));
        assert!(matches!(events[3], RegistryEvent::NameDeleted { .. }));
        assert!(events.iter().all(|e| e.name() == "alice"));
    }

    #[test]
    fn test_lifecycle_through_handler() {
        let service = funded_service(&[B1, B2], "100token", RegistryConfig::default());
        let handler = RegistryHandler::new(Arc::new(service));
        let hex = |b: u8| addr(b).to_hex();

        let submit = |payload: CommandPayload| handler.handle_submit(SubmitCommandRequest::new(payload));

        assert!(submit(CommandPayload::BuyName {
            name: "alice".into(),
            bid: "10token".into(),
            buyer: hex(B1),
        })
        .success);
        assert!(submit(CommandPayload::SetName {
            name: "alice".into(),
            value: "hello".into(),
            owner: hex(B1),
        })
        .success);
        let stolen = submit(CommandPayload::DeleteName {
            name: "alice".into(),
            owner: hex(B2),
        });
        assert!(!stolen.success);
        assert_eq!(stolen.error_code, Some(4));

        assert_eq!(
            handler.handle_query(RegistryQuery::Resolve { name: "alice".into() }),
            QueryResponse::Value { value: "hello".into() }
        );
        assert_eq!(
            handler.handle_query(RegistryQuery::TotalValueLocked),
            QueryResponse::Amount { amount: coins("10token") }
        );
    }

    #[test]
    fn test_reads_are_idempotent() {
        let service = funded_service(&[B1], "100token", RegistryConfig::default());
        service.execute(buy("alice", "10token", B1)).unwrap();

        let first = service.get_entry("alice").unwrap();
        let second = service.get_entry("alice").unwrap();

        assert_eq!(first, second);
        assert_eq!(service.list_names().unwrap(), service.list_names().unwrap());
    }

    // =============================================================================
    // SEEDED RANDOM SEQUENCES
    // =============================================================================

    const ACCOUNTS: [u8; 4] = [1, 2, 3, 4];
    const NAMES: [&str; 3] = ["alice", "bob", "carol"];

    fn random_command(rng: &mut StdRng) -> ns_registry::Command {
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        let actor = ACCOUNTS[rng.gen_range(0..ACCOUNTS.len())];
        match rng.gen_range(0..10) {
            0..=5 => buy(name, &format!("{}token", rng.gen_range(1..60)), actor),
            6..=7 => set_value(name, &format!("v{}", rng.gen_range(0..100)), actor),
            _ => delete(name, actor),
        }
    }

    #[test]
    fn test_random_sequences_preserve_invariants() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let service = funded_service(&ACCOUNTS, "200token", RegistryConfig::default());
            let supply = service.ledger().total_supply().unwrap();

            for _ in 0..200 {
                let command = random_command(&mut rng);
                let name = command.name().to_string();
                let before = service.get_entry(&name).ok();
                let balances_before: Vec<_> = ACCOUNTS
                    .iter()
                    .map(|a| service.ledger().balance(&addr(*a)))
                    .collect();

                let result = service.execute(command);
                let after = service.get_entry(&name).ok();

                // Funds are only ever moved, never created or destroyed
                assert_eq!(service.ledger().total_supply().unwrap(), supply, "seed {}", seed);

                if let Some(entry) = &after {
                    assert!(entry.owner.is_well_formed(), "seed {}", seed);
                }

                match result {
                    Err(_) => {
                        assert!(
                            invariant_unchanged(before.as_ref(), after.as_ref()),
                            "rejected command mutated state, seed {}",
                            seed
                        );
                        let balances_after: Vec<_> = ACCOUNTS
                            .iter()
                            .map(|a| service.ledger().balance(&addr(*a)))
                            .collect();
                        assert_eq!(balances_before, balances_after, "seed {}", seed);
                    }
                    Ok(receipt) => {
                        if let (Some(prev), Some(next), Some(RegistryEvent::NameSold { .. })) =
                            (&before, &after, receipt.events.first())
                        {
                            assert!(next.price.dominates(&prev.price), "seed {}", seed);
                        }
                    }
                }
            }
        }
    }
}
