//! Page Selector Component
//!
//! Numbered buttons for every page of the filtered view.

use leptos::prelude::*;

use crate::context::AppContext;

/// Row of page buttons, one per page, the current one highlighted
#[component]
pub fn PageSelector(total_pages: Memo<usize>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="pagination">
            <For
                each=move || 1..=total_pages.get()
                key=|page| *page
                children=move |page| {
                    let btn_class = move || {
                        if ctx.current_page.get() == page {
                            "page-button active"
                        } else {
                            "page-button"
                        }
                    };

                    view! {
                        <button class=btn_class on:click=move |_| ctx.go_to_page(page)>
                            {page}
                        </button>
                    }
                }
            />
        </div>
    }
}
