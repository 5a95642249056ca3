// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-way binding between a single selection and a caller-owned model.
//!
//! Run:
//! - `RUST_LOG=understory_selection=trace cargo run -p understory_selection_demos --example model_binding`

use tracing_subscriber::EnvFilter;
use understory_selection::{Mandatory, Model, SelectionOptions, Single, TicketInput};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tabs: Single<String, &str> =
        Single::new(SelectionOptions::single(Mandatory::Required)).unwrap();

    // The model names a tab that has not registered yet.
    let model = Model::new(Some("settings"));
    tabs.bind_values(model.clone()).unwrap();
    let _ = tabs.commit();
    println!("before registration: {:?}", tabs.selected_value());

    for name in ["home", "profile", "settings"] {
        tabs.register(TicketInput::with_id(name.to_string(), name))
            .unwrap();
    }
    let _ = tabs.commit();
    println!("after registration:  {:?}", tabs.selected_value());
    assert_eq!(tabs.selected_value(), Some(&"settings"));

    // Store -> model.
    tabs.toggle(&"profile".to_string());
    let _ = tabs.commit();
    println!("model after toggle:  {:?}", model.get());
    assert_eq!(model.get(), Some("profile"));

    // Model -> store. Clearing a required selection is refused and written back.
    model.set(None);
    let _ = tabs.commit();
    println!("model after clear:   {:?}", model.get());
    assert_eq!(model.get(), Some("profile"));

    model.set(Some("home"));
    let _ = tabs.commit();
    assert_eq!(tabs.selected_id().map(String::as_str), Some("home"));
}
