//! Favorites Render Pass
//!
//! One pass resolves every stored id with its own catalog lookup and
//! publishes the panel state as each lookup lands. Ids whose lookup fails are
//! collected and removed in a single write once the pass is over, and the
//! caller then starts one fresh pass over the shorter list. A pass that is
//! superseded by a newer one stops publishing and removes nothing.

use futures::stream::{FuturesUnordered, StreamExt};

use super::{FavoritesRepository, KeyValueStore};
use crate::catalog::RecipeCatalog;
use crate::error::{FetchError, FetchResult, StorageResult};
use crate::models::Recipe;
use crate::view_model::{CardAction, CardModel, FavoritesView};

/// Progress of a single pass
#[derive(Debug, Default)]
pub struct FavoritesPass {
    pending: usize,
    cards: Vec<CardModel>,
    stale: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Ids whose lookup failed, in arrival order
    pub stale: Vec<String>,
    pub rendered: usize,
    /// A newer pass took over before this one finished
    pub cancelled: bool,
}

impl FavoritesPass {
    pub fn new(ids: &[String]) -> Self {
        Self {
            pending: ids.len(),
            ..Default::default()
        }
    }

    /// Record one lookup. Returns whether the visible cards changed.
    pub fn record(&mut self, id: &str, result: FetchResult<Recipe>) -> bool {
        self.pending = self.pending.saturating_sub(1);
        match result {
            Ok(recipe) => match CardModel::build(&recipe, CardAction::Remove) {
                Some(card) => {
                    self.cards.push(card);
                    true
                }
                None => {
                    log::info!("favorite {} has incomplete recipe data, not shown", id);
                    false
                }
            },
            // the catalog answered for this id, the body just did not decode
            Err(FetchError::Decode(err)) => {
                log::info!("favorite {} returned unreadable recipe data, not shown: {}", id, err);
                false
            }
            Err(err) => {
                log::error!("Error fetching favorite recipe {}: {}", id, err);
                self.stale.push(id.to_string());
                false
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.pending == 0
    }

    /// Placeholder until the first card lands, empty message if the pass
    /// ends with nothing to show
    pub fn view(&self) -> FavoritesView {
        if !self.cards.is_empty() {
            FavoritesView::Cards(self.cards.clone())
        } else if self.is_complete() {
            FavoritesView::Empty
        } else {
            FavoritesView::Loading
        }
    }

    fn finish(self, cancelled: bool) -> PassReport {
        PassReport {
            stale: if cancelled { Vec::new() } else { self.stale },
            rendered: self.cards.len(),
            cancelled,
        }
    }
}

/// Drive one pass to completion.
///
/// `is_current` is polled after every lookup; once it returns `false` the
/// remaining lookups are dropped. `publish` receives the panel state whenever
/// it changes.
pub async fn run_favorites_pass<C, F, P>(
    catalog: &C,
    ids: Vec<String>,
    mut is_current: F,
    mut publish: P,
) -> PassReport
where
    C: RecipeCatalog + ?Sized,
    F: FnMut() -> bool,
    P: FnMut(FavoritesView),
{
    let mut pass = FavoritesPass::new(&ids);
    if ids.is_empty() {
        publish(pass.view());
        return pass.finish(false);
    }

    let mut lookups: FuturesUnordered<_> = ids
        .iter()
        .map(|id| async move { (id.as_str(), catalog.lookup(id).await) })
        .collect();

    while let Some((id, result)) = lookups.next().await {
        if !is_current() {
            log::debug!("favorites pass superseded, dropping {} lookups", lookups.len());
            return pass.finish(true);
        }
        let changed = pass.record(id, result);
        if changed || pass.is_complete() {
            publish(pass.view());
        }
    }

    pass.finish(false)
}

/// Remove the stale ids a finished pass found. Returns `true` when the
/// caller should start one fresh pass.
pub fn settle_pass<S: KeyValueStore>(
    repo: &FavoritesRepository<S>,
    report: &PassReport,
) -> StorageResult<bool> {
    if report.cancelled || report.stale.is_empty() {
        return Ok(false);
    }
    log::warn!("removing {} stale favorites: {:?}", report.stale.len(), report.stale);
    repo.remove_many(&report.stale)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::{recipe, FakeCatalog};
    use crate::favorites::MemoryStore;
    use futures::executor::block_on;
    use std::cell::Cell;

    const KEY: &str = "favorites";

    fn run(catalog: &FakeCatalog, ids: Vec<String>) -> (PassReport, Vec<FavoritesView>) {
        let mut published = Vec::new();
        let report = block_on(run_favorites_pass(catalog, ids, || true, |view| published.push(view)));
        (report, published)
    }

    fn card_ids(view: &FavoritesView) -> Vec<String> {
        match view {
            FavoritesView::Cards(cards) => cards.iter().map(|c| c.id.clone()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_empty_favorites_show_empty_message() {
        let catalog = FakeCatalog::default();
        let (report, published) = run(&catalog, vec![]);

        assert_eq!(published, vec![FavoritesView::Empty]);
        assert_eq!(report, PassReport::default());
        assert!(catalog.lookups.borrow().is_empty());
    }

    #[test]
    fn test_one_lookup_per_id() {
        let catalog = FakeCatalog::default()
            .with_record(recipe("a", "A"))
            .with_record(recipe("b", "B"));
        let (report, published) = run(&catalog, vec!["a".into(), "b".into()]);

        assert_eq!(report.rendered, 2);
        assert!(report.stale.is_empty());
        let mut looked_up = catalog.lookups.borrow().clone();
        looked_up.sort();
        assert_eq!(looked_up, vec!["a".to_string(), "b".to_string()]);

        let last = published.last().unwrap();
        let mut shown = card_ids(last);
        shown.sort();
        assert_eq!(shown, vec!["a".to_string(), "b".to_string()]);
        match last {
            FavoritesView::Cards(cards) => assert!(cards.iter().all(|c| c.action == CardAction::Remove)),
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_saved_favorite_adds_one_card() {
        let store = MemoryStore::with_entry(KEY, r#"["a"]"#);
        let repo = FavoritesRepository::new(&store, KEY);
        let catalog = FakeCatalog::default()
            .with_record(recipe("a", "A"))
            .with_record(recipe("b", "B"));

        let (before, _) = run(&catalog, repo.get_favorites());
        repo.save_favorite("b").unwrap();
        let (after, _) = run(&catalog, repo.get_favorites());

        assert_eq!(after.rendered, before.rendered + 1);
    }

    #[test]
    fn test_not_found_favorite_is_removed_after_pass() {
        let store = MemoryStore::with_entry(KEY, r#"["a","gone","b"]"#);
        let repo = FavoritesRepository::new(&store, KEY);
        let catalog = FakeCatalog::default()
            .with_record(recipe("a", "A"))
            .with_record(recipe("b", "B"));

        let (report, _) = run(&catalog, repo.get_favorites());
        assert_eq!(report.stale, vec!["gone".to_string()]);
        // still stored until the pass settles
        assert!(repo.contains("gone"));

        assert!(settle_pass(&repo, &report).unwrap());
        assert_eq!(repo.get_favorites(), vec!["a".to_string(), "b".to_string()]);

        // the single restart finds nothing more to remove
        let (second, _) = run(&catalog, repo.get_favorites());
        assert_eq!(second.rendered, 2);
        assert!(!settle_pass(&repo, &second).unwrap());
    }

    #[test]
    fn test_transport_failure_also_marks_stale() {
        let catalog = FakeCatalog::default().with_failure("x", FetchError::Transport("offline".into()));
        let (report, published) = run(&catalog, vec!["x".into()]);

        assert_eq!(report.stale, vec!["x".to_string()]);
        assert_eq!(published, vec![FavoritesView::Empty]);
    }

    #[test]
    fn test_incomplete_record_is_hidden_but_kept() {
        let mut partial = recipe("p", "Partial");
        partial.image = None;
        let catalog = FakeCatalog::default().with_record(partial);

        let (report, published) = run(&catalog, vec!["p".into()]);

        assert!(report.stale.is_empty());
        assert_eq!(report.rendered, 0);
        assert_eq!(published, vec![FavoritesView::Empty]);
    }

    #[test]
    fn test_superseded_pass_removes_nothing() {
        let store = MemoryStore::with_entry(KEY, r#"["gone1","gone2"]"#);
        let repo = FavoritesRepository::new(&store, KEY);
        let catalog = FakeCatalog::default();

        let mut published = Vec::new();
        let report = block_on(run_favorites_pass(
            &catalog,
            repo.get_favorites(),
            || false,
            |view| published.push(view),
        ));

        assert!(report.cancelled);
        assert!(report.stale.is_empty());
        assert!(published.is_empty());
        assert!(!settle_pass(&repo, &report).unwrap());
        assert_eq!(repo.get_favorites().len(), 2);
    }

    #[test]
    fn test_undecodable_record_is_hidden_but_kept() {
        let store = MemoryStore::with_entry(KEY, r#"["a","b"]"#);
        let repo = FavoritesRepository::new(&store, KEY);
        let catalog = FakeCatalog::default()
            .with_failure("a", FetchError::Decode("invalid type: null, expected struct Recipe".into()))
            .with_record(recipe("b", "B"));

        let (report, published) = run(&catalog, repo.get_favorites());

        assert!(report.stale.is_empty());
        assert_eq!(report.rendered, 1);
        assert_eq!(card_ids(published.last().unwrap()), vec!["b".to_string()]);
        assert!(!settle_pass(&repo, &report).unwrap());
        assert_eq!(repo.get_favorites(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_pass_superseded_mid_flight_drops_collected_stale_ids() {
        let store = MemoryStore::with_entry(KEY, r#"["a","gone1","b","gone2"]"#);
        let repo = FavoritesRepository::new(&store, KEY);
        let catalog = FakeCatalog::default()
            .with_record(recipe("a", "A"))
            .with_record(recipe("b", "B"));

        // three arrivals are recorded, so whatever the arrival order at least
        // one card and at least one 404 land before the pass is superseded
        let polls = Cell::new(0);
        let mut published = Vec::new();
        let report = block_on(run_favorites_pass(
            &catalog,
            repo.get_favorites(),
            || {
                polls.set(polls.get() + 1);
                polls.get() <= 3
            },
            |view| published.push(view),
        ));

        assert!(report.cancelled);
        assert_eq!(polls.get(), 4);
        assert!(report.stale.is_empty());
        assert!(report.rendered >= 1);
        // one publish per card recorded before the cutoff, none after
        assert_eq!(published.len(), report.rendered);
        assert!(published.iter().all(|view| matches!(view, FavoritesView::Cards(_))));

        assert!(!settle_pass(&repo, &report).unwrap());
        assert_eq!(repo.get_favorites().len(), 4);
    }

    #[test]
    fn test_pass_view_transitions() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let mut pass = FavoritesPass::new(&ids);
        assert_eq!(pass.view(), FavoritesView::Loading);

        assert!(!pass.record("a", Err(FetchError::Status(404))));
        assert_eq!(pass.stale, vec!["a".to_string()]);
        assert_eq!(pass.view(), FavoritesView::Loading);

        assert!(pass.record("b", Ok(recipe("b", "B"))));
        assert!(pass.is_complete());
        assert_eq!(card_ids(&pass.view()), vec!["b".to_string()]);
    }

    #[test]
    fn test_settle_failure_does_not_restart() {
        let store = MemoryStore::with_entry(KEY, r#"["gone"]"#);
        store.reject_writes(true);
        let repo = FavoritesRepository::new(&store, KEY);
        let report = PassReport { stale: vec!["gone".into()], rendered: 0, cancelled: false };

        assert!(settle_pass(&repo, &report).is_err());
    }
}
