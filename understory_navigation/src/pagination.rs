// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page selection with a windowed list of page buttons.
//!
//! Pages are tickets `1..=length` in a forced single selection, so exactly one
//! page is current whenever there are pages at all.
//!
//! [`Pagination::items`] lays pages out as: boundary pages at each end,
//! `sibling_count` pages either side of the current page, and an ellipsis for
//! each gap. A gap of exactly one page shows that page instead of an ellipsis,
//! so the number of items stays constant while the current page moves.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tracing::debug;
use understory_selection::{
    BindingId, Changes, Error, Mandatory, Model, SelectionOptions, Single, SubscriptionId,
    TicketInput,
};

/// Construction options for [`Pagination`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationOptions {
    /// Number of pages.
    pub length: u32,
    /// Initial page, clamped to `1..=length`.
    pub start: u32,
    /// Pages shown on each side of the current page.
    pub sibling_count: u32,
    /// Pages always shown at each end.
    pub boundary_count: u32,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            length: 1,
            start: 1,
            sibling_count: 1,
            boundary_count: 1,
        }
    }
}

impl PaginationOptions {
    /// Options for `length` pages starting at page 1.
    pub fn with_length(length: u32) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

/// One entry of the page button list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageItem {
    /// A page number.
    Page(u32),
    /// Placeholder for a run of hidden pages.
    Ellipsis,
}

/// Current page of a paged collection.
#[derive(Debug)]
pub struct Pagination {
    pages: Single<u32, u32>,
    length: u32,
    sibling_count: u32,
    boundary_count: u32,
}

impl Pagination {
    /// Create a pagination and select the start page.
    pub fn new(options: PaginationOptions) -> Result<Self, Error> {
        let mut pages = Single::new(SelectionOptions::single(Mandatory::Force))?;
        for page in 1..=options.length {
            pages.register(TicketInput::with_id(page, page))?;
        }
        let mut this = Self {
            pages,
            length: options.length,
            sibling_count: options.sibling_count,
            boundary_count: options.boundary_count,
        };
        this.select(options.start);
        Ok(this)
    }

    /// Current page, or `None` when there are no pages.
    pub fn page(&self) -> Option<u32> {
        self.pages.selected_id().copied()
    }

    /// Number of pages.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Go to `page`, clamped to `1..=length`.
    pub fn select(&mut self, page: u32) {
        if self.length == 0 {
            return;
        }
        let clamped = page.clamp(1, self.length);
        if clamped != page {
            debug!(requested = page, page = clamped, "page clamped to range");
        }
        self.pages.select(&clamped);
    }

    /// Go to the next page. No-op on the last page.
    pub fn next(&mut self) {
        if let Some(page) = self.page() {
            self.select(page.saturating_add(1));
        }
    }

    /// Go to the previous page. No-op on the first page.
    pub fn prev(&mut self) {
        if let Some(page) = self.page() {
            self.select(page.saturating_sub(1));
        }
    }

    /// Go to page 1.
    pub fn first(&mut self) {
        self.select(1);
    }

    /// Go to the last page.
    pub fn last(&mut self) {
        self.select(self.length);
    }

    /// Whether the current page is the first.
    pub fn is_first(&self) -> bool {
        self.page() == Some(1)
    }

    /// Whether the current page is the last.
    pub fn is_last(&self) -> bool {
        self.length > 0 && self.page() == Some(self.length)
    }

    /// Grow or shrink the page count.
    ///
    /// When shrinking past the current page, the last remaining page becomes
    /// current before the extra pages go away.
    pub fn set_length(&mut self, length: u32) -> Result<(), Error> {
        if self.pages.is_disposed() {
            return Err(Error::Disposed);
        }
        if length == self.length {
            return Ok(());
        }
        debug!(from = self.length, to = length, "set page count");
        if length > self.length {
            for page in self.length + 1..=length {
                self.pages.register(TicketInput::with_id(page, page))?;
                self.length = page;
            }
        } else {
            if length > 0 && self.page().is_some_and(|p| p > length) {
                self.pages.select(&length);
            }
            for page in (length + 1..=self.length).rev() {
                self.pages.unregister(&page);
            }
            self.length = length;
        }
        Ok(())
    }

    /// Page buttons for the current page.
    pub fn items(&self) -> Vec<PageItem> {
        let count = i64::from(self.length);
        let boundary = i64::from(self.boundary_count);
        let siblings = i64::from(self.sibling_count);
        let page = i64::from(self.page().unwrap_or(1));

        let siblings_start = (page - siblings)
            .min(count - boundary - siblings * 2 - 1)
            .max(boundary + 2);
        let siblings_end = (page + siblings)
            .max(boundary + siblings * 2 + 2)
            .min(count - boundary - 1);

        let mut items = Vec::new();
        push_pages(&mut items, 1, boundary.min(count));
        if siblings_start > boundary + 2 {
            items.push(PageItem::Ellipsis);
        } else if boundary + 1 < count - boundary {
            push_pages(&mut items, boundary + 1, boundary + 1);
        }
        push_pages(&mut items, siblings_start, siblings_end);
        if siblings_end < count - boundary - 1 {
            items.push(PageItem::Ellipsis);
        } else if count - boundary > boundary {
            push_pages(&mut items, count - boundary, count - boundary);
        }
        push_pages(&mut items, (count - boundary + 1).max(boundary + 1), count);
        items
    }

    /// Flush the underlying selection.
    pub fn commit(&mut self) -> Changes<u32> {
        self.pages.commit()
    }

    /// Read-only view of the page selection.
    pub fn selection(&self) -> &Single<u32, u32> {
        &self.pages
    }

    /// Bind a model of the current page number.
    pub fn bind(&mut self, model: Model<Option<u32>>) -> Result<BindingId, Error> {
        self.pages.bind_values(model)
    }

    /// Detach a model binding.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        self.pages.unbind(id)
    }

    /// Call `f` with every non-empty batch produced by [`commit`](Self::commit).
    pub fn subscribe(&mut self, f: impl FnMut(&Changes<u32>) + 'static) -> SubscriptionId {
        self.pages.subscribe(f)
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.pages.unsubscribe(id)
    }

    /// Tear down the page selection. Later [`set_length`](Self::set_length)
    /// calls fail with [`Error::Disposed`].
    pub fn dispose(&mut self) {
        self.pages.dispose();
        self.length = 0;
    }
}

fn push_pages(items: &mut Vec<PageItem>, from: i64, to: i64) {
    items.extend(
        (from..=to)
            .filter_map(|p| u32::try_from(p).ok())
            .map(PageItem::Page),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::{Ellipsis, Page};

    fn at(length: u32, page: u32) -> Vec<PageItem> {
        let mut p = Pagination::new(PaginationOptions::with_length(length)).unwrap();
        p.select(page);
        p.items()
    }

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(at(5, 3), [Page(1), Page(2), Page(3), Page(4), Page(5)]);
        assert_eq!(at(1, 1), [Page(1)]);
        assert!(at(0, 1).is_empty());
    }

    #[test]
    fn window_follows_current_page() {
        assert_eq!(
            at(10, 1),
            [Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            at(10, 5),
            [Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            at(10, 10),
            [Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn wider_boundaries_and_siblings() {
        let mut p = Pagination::new(PaginationOptions {
            length: 20,
            start: 10,
            sibling_count: 2,
            boundary_count: 2,
        })
        .unwrap();
        assert_eq!(
            p.items(),
            [
                Page(1),
                Page(2),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(19),
                Page(20),
            ]
        );
        p.select(4);
        assert_eq!(p.items()[..8], [Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Page(8)]);
    }

    #[test]
    fn select_clamps_to_range() {
        let mut p = Pagination::new(PaginationOptions::with_length(4)).unwrap();
        p.select(0);
        assert_eq!(p.page(), Some(1));
        p.select(99);
        assert_eq!(p.page(), Some(4));
        assert!(p.is_last());
    }

    #[test]
    fn stepping_stops_at_the_ends() {
        let mut p = Pagination::new(PaginationOptions {
            length: 3,
            start: 2,
            ..PaginationOptions::default()
        })
        .unwrap();
        p.prev();
        assert!(p.is_first());
        p.prev();
        assert_eq!(p.page(), Some(1));
        p.last();
        p.next();
        assert_eq!(p.page(), Some(3));
        p.first();
        p.next();
        assert_eq!(p.page(), Some(2));
    }

    #[test]
    fn shrinking_moves_current_page_into_range() {
        let mut p = Pagination::new(PaginationOptions {
            length: 10,
            start: 8,
            ..PaginationOptions::default()
        })
        .unwrap();
        p.set_length(5).unwrap();
        assert_eq!(p.page(), Some(5));
        assert_eq!(p.selection().len(), 5);
        p.set_length(7).unwrap();
        assert_eq!(p.page(), Some(5));
        p.last();
        assert_eq!(p.page(), Some(7));
        p.set_length(0).unwrap();
        assert_eq!(p.page(), None);
        assert!(p.items().is_empty());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: PaginationOptions =
            serde_json::from_str(r#"{ "length": 12, "siblingCount": 0 }"#).unwrap();
        assert_eq!(options.length, 12);
        assert_eq!(options.start, 1);
        assert_eq!(options.sibling_count, 0);
        assert_eq!(options.boundary_count, 1);
    }

    #[test]
    fn resizing_a_disposed_pagination_fails() {
        let mut p = Pagination::new(PaginationOptions::with_length(3)).unwrap();
        p.dispose();
        assert_eq!(p.set_length(6), Err(Error::Disposed));
        assert_eq!(p.length(), 0);
        assert!(p.items().is_empty());
    }

    #[test]
    fn bound_page_model_follows_navigation() {
        let mut p = Pagination::new(PaginationOptions::with_length(5)).unwrap();
        let model = Model::new(None);
        p.bind(model.clone()).unwrap();
        let _ = p.commit();
        assert_eq!(model.get(), Some(1));

        p.next();
        let _ = p.commit();
        assert_eq!(model.get(), Some(2));

        model.set(Some(4));
        let _ = p.commit();
        assert_eq!(p.page(), Some(4));
        assert_eq!(p.items().len(), 5);
    }
}
