//! Property tests for the in-memory repository.

use proptest::prelude::*;
use std::collections::HashSet;
use vet_clinic_core::{Client, Repository};

fn client_strategy() -> impl Strategy<Value = Client> {
    ("[A-Za-z ]{1,20}", "[0-9]{8,11}", "[a-z]{0,8}")
        .prop_map(|(name, phone, email)| Client::new(name, phone, email))
}

proptest! {
    #[test]
    fn prop_add_then_find_returns_equal_record(
        clients in prop::collection::vec(client_strategy(), 1..30),
    ) {
        let mut repo = Repository::new();
        for client in clients {
            let stored = repo.add(client.clone()).unwrap();
            let found = repo.find_by_id(stored.id).unwrap();
            prop_assert_eq!(&found, &stored);
            prop_assert_eq!(found.name, client.name);
            prop_assert_eq!(found.phone, client.phone);
            prop_assert_eq!(found.email, client.email);
        }
    }

    #[test]
    fn prop_ids_stay_unique_across_removals(
        clients in prop::collection::vec(client_strategy(), 1..30),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let mut repo = Repository::new();
        let mut issued = HashSet::new();
        for client in clients {
            let stored = repo.add(client).unwrap();
            prop_assert!(issued.insert(stored.id));
        }

        for index in removals {
            let current = repo.list_all();
            if current.is_empty() {
                break;
            }
            let victim = index.get(&current);
            repo.remove(victim).unwrap();
        }

        let fresh = repo.add(Client::new("Late", "000", "")).unwrap();
        prop_assert!(!issued.contains(&fresh.id));
    }

    #[test]
    fn prop_list_all_is_a_copy(clients in prop::collection::vec(client_strategy(), 1..10)) {
        let mut repo = Repository::new();
        for client in clients {
            repo.add(client).unwrap();
        }
        let before = repo.list_all();

        let mut listed = repo.list_all();
        listed.reverse();
        listed.truncate(1);
        for client in listed.iter_mut() {
            client.name.push('!');
        }

        prop_assert_eq!(repo.list_all(), before);
    }
}
