//! Client Management
//!
//! Paginated client table with a username search. Rows open the edit view.

use leptos::*;
use leptos_router::A;

use crate::api;
use crate::api::types::UserSummary;
use crate::components::{ListSkeleton, PageState, Pagination};
use crate::state::global::GlobalState;

const PAGE_SIZE: u32 = 10;

/// Admin client list page component
#[component]
pub fn ClientList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let pager = PageState::new();
    let (clients, set_clients) = create_signal(Vec::<UserSummary>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (fetching, set_fetching) = create_signal(false);
    let (search, set_search) = create_signal(String::new());

    let state_for_fetch = state;
    create_effect(move |_| {
        let page = pager.page.get();
        let _ = pager.reload.get();
        let search = search.get();

        let state = state_for_fetch.clone();
        set_fetching.set(true);
        spawn_local(async move {
            let filter = if search.trim().is_empty() {
                None
            } else {
                Some(search.trim().to_string())
            };
            match api::fetch_users(page, PAGE_SIZE, filter.as_deref()).await {
                Ok(result) => {
                    pager.total_pages.set(result.total_pages.max(1));
                    set_clients.set(result.items);
                    set_loaded.set(true);
                }
                Err(e) => state.show_error(&e),
            }
            set_fetching.set(false);
        });
    });

    let on_search = move |ev: web_sys::Event| {
        set_search.set(event_target_value(&ev));
        pager.reset_for_filter();
    };

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Clientes"</h1>
                    <p class="text-gray-400 mt-1">"Alta, edición y baja de clientes"</p>
                </div>

                <A
                    href="/admin/clients/new"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ Nuevo cliente"
                </A>
            </div>

            // Search
            <input
                type="text"
                placeholder="Buscar por usuario..."
                prop:value=move || search.get()
                on:input=on_search
                class="w-full max-w-sm bg-gray-700 rounded-lg px-4 py-2
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count={PAGE_SIZE as usize} /> }.into_view();
                }

                let rows = clients.get();
                if rows.is_empty() {
                    return view! {
                        <div class="text-center py-12 text-gray-400">
                            "No se encontraron clientes"
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="bg-gray-800 rounded-xl overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700/50 text-gray-400 text-left">
                                <tr>
                                    <th class="px-4 py-3">"Usuario"</th>
                                    <th class="px-4 py-3">"Nombre"</th>
                                    <th class="px-4 py-3">"DNI"</th>
                                    <th class="px-4 py-3">"Email"</th>
                                    <th class="px-4 py-3">"Teléfono"</th>
                                    <th class="px-4 py-3 text-right"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|client| view! {
                                    <ClientRow client=client />
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view()
            }}

            <Pagination pager=pager busy=fetching />
        </div>
    }
}

#[component]
fn ClientRow(client: UserSummary) -> impl IntoView {
    view! {
        <tr class="border-t border-gray-700">
            <td class="px-4 py-3">{client.username.clone()}</td>
            <td class="px-4 py-3">{format!("{} {}", client.firstname, client.lastname)}</td>
            <td class="px-4 py-3">{client.dni.clone()}</td>
            <td class="px-4 py-3 text-gray-400">{client.email.clone()}</td>
            <td class="px-4 py-3 text-gray-400">{client.phone.clone().unwrap_or_default()}</td>
            <td class="px-4 py-3 text-right">
                <A
                    href=format!("/admin/clients/{}/edit", client.id)
                    class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-xs font-medium transition-colors"
                >
                    "Editar"
                </A>
            </td>
        </tr>
    }
}
