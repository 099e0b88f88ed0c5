//! Pagination
//!
//! Paging state shared by the list views plus the pager control.

use leptos::*;

/// Reactive paging state for a list view
#[derive(Clone, Copy)]
pub struct PageState {
    pub page: RwSignal<u32>,
    pub total_pages: RwSignal<u32>,
    /// Bumped to force a refetch of the current page
    pub reload: RwSignal<u32>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            page: create_rw_signal(1),
            total_pages: create_rw_signal(1),
            reload: create_rw_signal(0),
        }
    }

    /// Any filter change starts over from the first page
    pub fn reset_for_filter(&self) {
        self.page.set(1);
    }

    /// Ask the backing list to load again, e.g. after a mutation
    pub fn refetch(&self) {
        self.reload.update(|n| *n += 1);
    }

    pub fn prev(&self) {
        let page = self.page.get_untracked();
        if page > 1 {
            self.page.set(page - 1);
        }
    }

    pub fn next(&self) {
        let page = self.page.get_untracked();
        if page < self.total_pages.get_untracked() {
            self.page.set(page + 1);
        }
    }
}

/// Prev/next pager; hidden while everything fits on one page
#[component]
pub fn Pagination(
    pager: PageState,
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            let total = pager.total_pages.get();
            if total <= 1 {
                return view! {}.into_view();
            }
            let page = pager.page.get();

            view! {
                <div class="flex items-center justify-center space-x-4 mt-6">
                    <button
                        on:click=move |_| pager.prev()
                        disabled=move || busy.get() || pager.page.get() <= 1
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        "Anterior"
                    </button>

                    <span class="text-sm text-gray-400">
                        {format!("Página {} de {}", page, total)}
                    </span>

                    <button
                        on:click=move |_| pager.next()
                        disabled=move || busy.get() || (pager.page.get() >= pager.total_pages.get())
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        "Siguiente"
                    </button>
                </div>
            }.into_view()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_change_resets_to_first_page() {
        let runtime = create_runtime();
        let pager = PageState::new();
        pager.page.set(4);
        pager.reset_for_filter();
        assert_eq!(pager.page.get_untracked(), 1);
        runtime.dispose();
    }

    #[test]
    fn test_refetch_bumps_reload_counter() {
        let runtime = create_runtime();
        let pager = PageState::new();
        assert_eq!(pager.reload.get_untracked(), 0);
        pager.refetch();
        pager.refetch();
        assert_eq!(pager.reload.get_untracked(), 2);
        runtime.dispose();
    }

    #[test]
    fn test_paging_stays_in_bounds() {
        let runtime = create_runtime();
        let pager = PageState::new();
        pager.total_pages.set(3);
        pager.prev();
        assert_eq!(pager.page.get_untracked(), 1);
        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.page.get_untracked(), 3);
        runtime.dispose();
    }
}
