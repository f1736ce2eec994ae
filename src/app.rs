//! Root application module.
//!
//! Contains the main App component, AppContext definition, DriveState,
//! and application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::Drive;
use crate::config::ROOT_LABEL;
use crate::core::{
    ActionOutcome, ActionRegistry, Activation, CatalogSource, EntryAction, Listing, Navigator,
    ResourceOpener, SharedCatalog, SharedOpener, StaticCatalog,
};
use crate::models::{Entry, ViewMode};
use crate::utils::dom::{self, NewTabOpener};

// ============================================================================
// DriveState
// ============================================================================

/// Browser session state managed with Leptos signals.
///
/// Lives for the page session only; a reload starts over at the root.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct DriveState {
    /// Breadcrumb stack and displayed entries.
    pub navigator: RwSignal<Navigator>,
    /// Grid or list layout.
    pub view_mode: RwSignal<ViewMode>,
    /// Free-text name filter.
    pub search_query: RwSignal<String>,
}

impl DriveState {
    /// Creates a session positioned at the catalog root.
    ///
    /// Initializes:
    /// - Breadcrumb: `ROOT_LABEL` only
    /// - View mode: Grid
    /// - Empty search query
    pub fn new(catalog: &dyn CatalogSource) -> Self {
        Self {
            navigator: RwSignal::new(Navigator::new(ROOT_LABEL, catalog)),
            view_mode: RwSignal::new(ViewMode::default()),
            search_query: RwSignal::new(String::new()),
        }
    }

    /// Current main panel content. Tracks all three signals.
    pub fn listing(&self) -> Listing {
        let query = self.search_query.get();
        let mode = self.view_mode.get();
        self.navigator
            .with(|nav| Listing::build(nav.displayed(), &query, mode))
    }

    /// Carry out what a click on `entry` resolved to.
    pub fn perform(
        &self,
        catalog: &dyn CatalogSource,
        opener: &dyn ResourceOpener,
        entry: &Entry,
        activation: Activation,
    ) {
        match activation {
            Activation::EnterFolder => {
                if let Some(Err(err)) = self.navigator.try_update(|nav| nav.enter(catalog, entry)) {
                    leptos::logging::warn!("cannot open folder: {err}");
                }
            }
            Activation::OpenResource(locator) => {
                leptos::logging::log!("opening {locator}");
                if !opener.open(&locator) {
                    leptos::logging::warn!("browser refused to open {locator}");
                }
            }
            Activation::Inert => {
                leptos::logging::log!("'{}' has no resource to open", entry.name);
            }
        }
    }

    /// Jump to breadcrumb `index`.
    ///
    /// Subscribers are only notified if the trail changed.
    pub fn jump_to(&self, index: usize) {
        self.navigator.maybe_update(|nav| nav.jump_to(index));
    }

    /// Return to the catalog root.
    pub fn go_home(&self) {
        self.navigator.update(Navigator::reset);
    }

    pub fn toggle_view_mode(&self) {
        self.view_mode.update(|mode| *mode = mode.toggled());
    }

    pub fn set_query(&self, query: String) {
        self.search_query.set(query);
    }

    /// Id of the folder being shown (`None` at the root).
    pub fn current_folder(&self) -> Option<String> {
        self.navigator
            .with_untracked(|nav| nav.current_folder().map(str::to_string))
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Drive state**: Navigation, view mode, search
/// - **Catalog**: Read-only entry source
/// - **Actions**: Capability table for the per-entry menu
/// - **Opener**: Host effect for file resources
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session state (navigation, layout, search).
    pub drive: DriveState,

    /// Read-only catalog of entries.
    pub catalog: StoredValue<SharedCatalog>,

    /// Per-entry action handlers.
    pub actions: StoredValue<ActionRegistry>,

    /// Opens file resources outside the app.
    pub opener: StoredValue<SharedOpener>,
}

impl AppContext {
    pub fn new(catalog: SharedCatalog, actions: ActionRegistry, opener: SharedOpener) -> Self {
        Self {
            drive: DriveState::new(catalog.as_ref()),
            catalog: StoredValue::new(catalog),
            actions: StoredValue::new(actions),
            opener: StoredValue::new(opener),
        }
    }

    /// Handle a click on an entry card or row.
    pub fn open(&self, entry: &Entry) {
        self.perform(entry, Activation::of(entry));
    }

    fn perform(&self, entry: &Entry, activation: Activation) {
        self.catalog.with_value(|catalog| {
            self.opener.with_value(|opener| {
                self.drive
                    .perform(catalog.as_ref(), opener.as_ref(), entry, activation)
            })
        });
    }

    /// Run an action menu item for `entry`.
    pub fn run_action(&self, action: EntryAction, entry: &Entry) {
        match self.actions.with_value(|actions| actions.dispatch(action, entry)) {
            ActionOutcome::Unimplemented(action) => {
                leptos::logging::log!("{} is not available for '{}'", action.label(), entry.name);
            }
            ActionOutcome::Completed(Some(activation)) => self.perform(entry, activation),
            ActionOutcome::Completed(None) => {}
        }
    }

    /// Whether `action` has a handler.
    pub fn is_available(&self, action: EntryAction) -> bool {
        self.actions
            .with_value(|actions| actions.capability(action).is_implemented())
    }
}

/// Root application component.
///
/// This component:
/// - Loads the embedded catalog
/// - Creates and provides the global AppContext
/// - Renders the Drive browser, or a fallback page if the catalog is invalid
#[component]
pub fn App() -> impl IntoView {
    match StaticCatalog::embedded() {
        Ok(catalog) => {
            provide_context(AppContext::new(
                Arc::new(catalog),
                ActionRegistry::placeholder(),
                Arc::new(NewTabOpener),
            ));
            view! { <Drive /> }.into_any()
        }
        Err(err) => {
            leptos::logging::error!("failed to load catalog: {err}");
            view! { <LoadFailure message=err.to_string() /> }.into_any()
        }
    }
}

/// Full-page fallback shown when the catalog cannot be loaded.
#[component]
fn LoadFailure(message: String) -> impl IntoView {
    view! {
        <div style="
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            height: 100vh;
            padding: 2rem;
            background: #f8fafc;
            color: #0f172a;
            font-family: system-ui, sans-serif;
        ">
            <div style="max-width: 600px; text-align: center;">
                <h1 style="color: #dc2626; margin-bottom: 1rem;">
                    "Something went wrong"
                </h1>
                <p style="color: #64748b; margin-bottom: 2rem;">
                    "The file catalog could not be loaded. Please try reloading the page."
                </p>
                <details style="
                    text-align: left;
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    padding: 1rem;
                    border-radius: 8px;
                    margin-bottom: 1rem;
                ">
                    <summary style="cursor: pointer; color: #64748b;">"Error details"</summary>
                    <p style="margin: 1rem 0 0 0; color: #dc2626; font-size: 0.9rem;">
                        {message}
                    </p>
                </details>
                <button
                    on:click=move |_| dom::reload()
                    style="
                        background: #2563eb;
                        color: white;
                        border: none;
                        padding: 0.75rem 2rem;
                        border-radius: 6px;
                        cursor: pointer;
                        font-size: 1rem;
                    "
                >
                    "Reload Page"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::models::MediaType;

    /// Records every locator instead of touching the browser.
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
        accept: bool,
    }

    impl RecordingOpener {
        fn new(accept: bool) -> Arc<Self> {
            Arc::new(Self {
                opened: Mutex::new(Vec::new()),
                accept,
            })
        }

        fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl ResourceOpener for RecordingOpener {
        fn open(&self, locator: &str) -> bool {
            self.opened.lock().unwrap().push(locator.to_string());
            self.accept
        }
    }

    fn context_with(opener: SharedOpener) -> AppContext {
        let catalog: SharedCatalog = Arc::new(StaticCatalog::embedded().unwrap());
        AppContext::new(catalog, ActionRegistry::placeholder(), opener)
    }

    fn context() -> AppContext {
        context_with(RecordingOpener::new(true))
    }

    fn displayed_names(ctx: &AppContext) -> Vec<String> {
        ctx.drive
            .navigator
            .with_untracked(|nav| nav.displayed().iter().map(|e| e.name.clone()).collect())
    }

    fn find(ctx: &AppContext, name: &str) -> Entry {
        ctx.drive.navigator.with_untracked(|nav| {
            nav.displayed()
                .iter()
                .find(|e| e.name == name)
                .cloned()
                .unwrap()
        })
    }

    #[test]
    fn test_open_folder_and_search() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            ctx.open(&find(&ctx, "Documents"));

            assert_eq!(
                displayed_names(&ctx),
                ["Project Proposal.pdf", "Meeting Notes.docx"]
            );
            assert_eq!(ctx.drive.current_folder().as_deref(), Some("1"));

            ctx.drive.set_query("NOTES".to_string());
            let listing = ctx.drive.listing();
            let names: Vec<_> = listing.entries().iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, ["Meeting Notes.docx"]);
        });
    }

    #[test]
    fn test_open_file_keeps_navigation() {
        let owner = Owner::new();
        owner.with(|| {
            let opener = RecordingOpener::new(true);
            let ctx = context_with(opener.clone());
            let before = ctx.drive.navigator.get_untracked();

            ctx.open(&find(&ctx, "Logo Design.ai"));
            assert_eq!(opener.opened(), ["/files/logo.ai"]);
            assert_eq!(ctx.drive.navigator.get_untracked(), before);

            // unlinked files and folders never reach the opener
            ctx.open(&Entry::file("x", "draft.txt", Some(MediaType::Document)));
            ctx.open(&find(&ctx, "Documents"));
            assert_eq!(opener.opened(), ["/files/logo.ai"]);
        });
    }

    #[test]
    fn test_refused_open_keeps_navigation() {
        let owner = Owner::new();
        owner.with(|| {
            let opener = RecordingOpener::new(false);
            let ctx = context_with(opener.clone());
            let before = ctx.drive.navigator.get_untracked();

            ctx.open(&find(&ctx, "Background Music.mp3"));

            assert_eq!(opener.opened().len(), 1);
            assert_eq!(ctx.drive.navigator.get_untracked(), before);
        });
    }

    #[test]
    fn test_breadcrumb_jump() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            ctx.open(&find(&ctx, "Photos"));
            assert_eq!(ctx.drive.navigator.with_untracked(Navigator::depth), 2);

            ctx.drive.jump_to(5);
            assert_eq!(ctx.drive.navigator.with_untracked(Navigator::depth), 2);

            ctx.drive.jump_to(0);
            assert_eq!(ctx.drive.navigator.with_untracked(Navigator::depth), 1);
            assert_eq!(displayed_names(&ctx).len(), 6);

            ctx.open(&find(&ctx, "Videos"));
            ctx.drive.go_home();
            assert_eq!(ctx.drive.navigator.with_untracked(Navigator::depth), 1);
        });
    }

    #[test]
    fn test_jump_to_current_level_does_not_notify() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            ctx.open(&find(&ctx, "Photos"));

            let runs = Arc::new(AtomicUsize::new(0));
            let depth = Memo::new({
                let runs = runs.clone();
                let navigator = ctx.drive.navigator;
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    navigator.with(Navigator::depth)
                }
            });
            assert_eq!(depth.get_untracked(), 2);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            ctx.drive.jump_to(1);
            ctx.drive.jump_to(7);
            assert_eq!(depth.get_untracked(), 2);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            ctx.drive.jump_to(0);
            assert_eq!(depth.get_untracked(), 1);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_view_toggle_keeps_entries() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            let grid = ctx.drive.listing();
            assert!(matches!(grid, Listing::Grid(_)));

            ctx.drive.toggle_view_mode();
            let list = ctx.drive.listing();
            assert!(matches!(list, Listing::List(_)));
            assert_eq!(grid.entries(), list.entries());
        });
    }

    #[test]
    fn test_unimplemented_action_is_noop() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            let before = ctx.drive.navigator.get_untracked();
            let documents = find(&ctx, "Documents");

            for action in EntryAction::ALL {
                assert!(!ctx.is_available(action));
                ctx.run_action(action, &documents);
            }
            assert_eq!(ctx.drive.navigator.get_untracked(), before);
        });
    }
}
