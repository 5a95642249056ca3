// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pagination windows, a stepper, and a collapsing breadcrumb trail.
//!
//! Run:
//! - `cargo run -p understory_selection_demos --example navigation`

use tracing_subscriber::EnvFilter;
use understory_navigation::{
    Breadcrumbs, Crumb, ExpansionMode, ExpansionPanel, PageItem, Pagination, PaginationOptions,
    Stepper,
};
use understory_selection::{Mandatory, TicketInput};

fn render_pages(items: &[PageItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("== Pagination ==");
    let options: PaginationOptions =
        serde_json::from_str(r#"{ "length": 12, "siblingCount": 1 }"#).expect("valid options");
    let mut pages = Pagination::new(options).unwrap();
    for page in [1, 6, 12, 40] {
        pages.select(page);
        println!("  page {page:>2}: {}", render_pages(&pages.items()));
    }

    println!("== Stepper ==");
    let mut steps: Stepper<u32, &str> = Stepper::new(Mandatory::Force).unwrap();
    for title in ["cart", "shipping", "payment", "confirm"] {
        steps.register(TicketInput::new(title)).unwrap();
    }
    steps.set_disabled(&1, true);
    while !steps.is_last() {
        steps.next();
        println!("  at {:?}", steps.current().map(|t| *t.value()));
    }

    println!("== Expansion panels ==");
    let mut faq: ExpansionPanel<u32, &str> =
        ExpansionPanel::new(ExpansionMode::Accordion, Mandatory::Off).unwrap();
    let ids: Vec<u32> = ["shipping", "returns", "warranty"]
        .into_iter()
        .map(|q| faq.register(TicketInput::new(q)).unwrap())
        .collect();
    faq.expand(&ids[0]);
    faq.expand(&ids[2]);
    println!("  open: {:?}", faq.expanded_ids().collect::<Vec<_>>());

    println!("== Breadcrumbs ==");
    let mut trail: Breadcrumbs<u32, &str> = Breadcrumbs::new(3).unwrap();
    let mut docs = None;
    for name in ["home", "docs", "guides", "selection", "models"] {
        let id = trail.push(TicketInput::new(name)).unwrap();
        if name == "docs" {
            docs = Some(id);
        }
    }
    let show = |trail: &Breadcrumbs<u32, &str>| {
        trail
            .items()
            .iter()
            .map(|c| match c {
                Crumb::Item(t) => *t.value(),
                Crumb::Ellipsis => "…",
            })
            .collect::<Vec<_>>()
            .join(" / ")
    };
    println!("  {}", show(&trail));
    if let Some(docs) = docs {
        trail.navigate_to(&docs);
    }
    println!("  {}", show(&trail));
}
