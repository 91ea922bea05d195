//! Property-based tests for the lead store.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{LeadStore, MemoryStore};
    use enspyre_core::{LeadFormData, LeadId, LeadStatus};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    enum Op {
        Save(String),
        Update(usize, LeadStatus),
        Delete(usize),
        DeleteMissing,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => "[a-z]{1,8}".prop_map(Op::Save),
            2 => (any::<usize>(), prop::sample::select(LeadStatus::ALL.to_vec()))
                .prop_map(|(i, s)| Op::Update(i, s)),
            1 => any::<usize>().prop_map(Op::Delete),
            1 => Just(Op::DeleteMissing),
        ]
    }

    proptest! {
        #[test]
        fn test_n_saves_list_n_unique_records(names in prop::collection::vec("[a-z]{1,8}", 0..16)) {
            let mut store = LeadStore::new(MemoryStore::new());
            for name in &names {
                store.save(LeadFormData::new(name.clone(), format!("{name}@ex.com"))).unwrap();
            }

            let leads = store.list();
            prop_assert_eq!(leads.len(), names.len());
            let ids: HashSet<_> = leads.iter().map(|l| l.id().clone()).collect();
            prop_assert_eq!(ids.len(), names.len());
            for (lead, name) in leads.iter().zip(&names) {
                prop_assert_eq!(lead.name(), name.as_str());
                prop_assert_eq!(lead.status(), LeadStatus::New);
            }
        }

        #[test]
        fn test_store_tracks_model(ops in prop::collection::vec(arb_op(), 0..24)) {
            let mut store = LeadStore::new(MemoryStore::new());
            let mut model: Vec<(LeadId, LeadStatus)> = Vec::new();

            for op in ops {
                match op {
                    Op::Save(name) => {
                        let lead = store
                            .save(LeadFormData::new(name.clone(), format!("{name}@ex.com")))
                            .unwrap();
                        model.push((lead.id().clone(), LeadStatus::New));
                    }
                    Op::Update(i, status) if !model.is_empty() => {
                        let idx = i % model.len();
                        store.update_status(&model[idx].0, status).unwrap();
                        model[idx].1 = status;
                    }
                    Op::Delete(i) if !model.is_empty() => {
                        let idx = i % model.len();
                        let (id, _) = model.remove(idx);
                        store.delete(&id).unwrap();
                    }
                    Op::DeleteMissing => {
                        store.delete(&LeadId::from("not-a-stored-id")).unwrap();
                    }
                    Op::Update(..) | Op::Delete(_) => {}
                }

                let listed: Vec<_> = store
                    .list()
                    .into_iter()
                    .map(|l| (l.id().clone(), l.status()))
                    .collect();
                prop_assert_eq!(&listed, &model);
            }
        }
    }
}
