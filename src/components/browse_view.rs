//! Browse View Component
//!
//! Search input plus the paginated card grid.

use leptos::prelude::*;

use crate::components::{PageSelector, PostCard, SearchBox};
use crate::context::AppContext;
use crate::filter::filter_posts;
use crate::paging::{page_count, page_slice};
use crate::store::{use_app_store, AppStateStoreFields};

/// Main view: live search over all posts, shown five to a page
#[component]
pub fn BrowseView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Filtered view, re-derived on every term or collection change
    let filtered = Memo::new(move |_| {
        filter_posts(&store.posts().read(), &ctx.search_term.get())
    });
    let total_pages = Memo::new(move |_| page_count(filtered.get().len()));
    let visible = Memo::new(move |_| {
        let posts = filtered.get();
        page_slice(&posts, ctx.current_page.get()).to_vec()
    });

    view! {
        <div class="browse-view">
            <h1>"Home"</h1>
            <SearchBox />

            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <p class="empty-note">"No results found."</p> }
            >
                <div class="card-container">
                    <For
                        each=move || visible.get()
                        key=|post| post.id
                        children=move |post| view! { <PostCard post=post /> }
                    />
                </div>
            </Show>

            <Show when=move || (total_pages.get() > 1)>
                <PageSelector total_pages=total_pages />
            </Show>
        </div>
    }
}
