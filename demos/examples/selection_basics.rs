// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registering tickets and driving a multiple selection.
//!
//! Run:
//! - `RUST_LOG=understory_selection=debug cargo run -p understory_selection_demos --example selection_basics`

use tracing_subscriber::EnvFilter;
use understory_selection::{Change, Group, Mandatory, SelectionOptions, TicketInput};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Options usually come from component props.
    let options: SelectionOptions =
        serde_json::from_str(r#"{ "multiple": true, "mandatory": "force" }"#)
            .expect("valid options");
    let mut chips: Group<u32, &str> = Group::new(options);

    let rust = chips.register(TicketInput::new("rust")).unwrap();
    let zig = chips.register(TicketInput::new("zig")).unwrap();
    let go = chips.register(TicketInput::new("go").disabled(true)).unwrap();
    let c = chips.register(TicketInput::new("c")).unwrap();

    let subscription = chips.subscribe(|batch| {
        for change in batch.iter() {
            match change {
                Change::Selected(id) => println!("  + {id}"),
                Change::Unselected(id) => println!("  - {id}"),
                _ => {}
            }
        }
    });

    println!("== Registration (force picks the first chip) ==");
    let _ = chips.commit();
    assert_eq!(chips.selected_ids().copied().collect::<Vec<_>>(), [rust]);

    println!("== Select zig and c; go is disabled ==");
    chips.select_many([&zig, &c, &go]);
    let _ = chips.commit();
    assert!(chips.is_all_selected());
    assert!(!chips.is_selected(&go));

    println!("== Unselect everything (force keeps one) ==");
    chips.unselect_all();
    let _ = chips.commit();
    println!("  left selected: {:?}", chips.selected_values().collect::<Vec<_>>());
    assert_eq!(chips.selected_count(), 1);

    chips.unsubscribe(subscription);
    chips.dispose();
    assert!(chips.register(TicketInput::new("late")).is_err());
}
