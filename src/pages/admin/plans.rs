//! Plan Management
//!
//! Service plan catalog with a create/edit modal and guarded deletion.

use leptos::*;

use crate::api;
use crate::api::types::{format_amount, Plan, PlanInput};
use crate::components::{ConfirmModal, ListSkeleton, PageState, Pagination};
use crate::state::global::GlobalState;

const PAGE_SIZE: u32 = 10;

/// All three plan fields are required; the numeric ones must parse
fn parse_plan_input(name: &str, speed: &str, price: &str) -> Result<PlanInput, &'static str> {
    if name.trim().is_empty() {
        return Err("El nombre es obligatorio");
    }

    let speed_mbps: u32 = speed
        .trim()
        .parse()
        .map_err(|_| "La velocidad debe ser un número entero de Mbps")?;
    if speed_mbps == 0 {
        return Err("La velocidad debe ser mayor a cero");
    }

    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| "El precio debe ser un número")?;
    if price < 0.0 {
        return Err("El precio no puede ser negativo");
    }

    Ok(PlanInput {
        name: name.trim().to_string(),
        speed_mbps,
        price,
    })
}

/// Which dialog is open, if any
#[derive(Clone)]
enum Modal {
    Closed,
    Create,
    Edit(Plan),
}

/// Plan management page component
#[component]
pub fn PlanManagement() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let pager = PageState::new();
    let (plans, set_plans) = create_signal(Vec::<Plan>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (fetching, set_fetching) = create_signal(false);
    let modal = create_rw_signal(Modal::Closed);
    let deleting = create_rw_signal(None::<Plan>);
    let (delete_busy, set_delete_busy) = create_signal(false);

    let state_for_fetch = state.clone();
    create_effect(move |_| {
        let page = pager.page.get();
        let _ = pager.reload.get();

        let state = state_for_fetch.clone();
        set_fetching.set(true);
        spawn_local(async move {
            match api::fetch_plans(page, PAGE_SIZE).await {
                Ok(result) => {
                    pager.total_pages.set(result.total_pages.max(1));
                    set_plans.set(result.items);
                    set_loaded.set(true);
                }
                Err(e) => state.show_error(&e),
            }
            set_fetching.set(false);
        });
    });

    let state_for_delete = state;
    let confirm_delete = move || {
        let plan = match deleting.get_untracked() {
            Some(plan) => plan,
            None => return,
        };

        set_delete_busy.set(true);
        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_plan(plan.id).await {
                Ok(()) => {
                    state.show_success("Plan eliminado");
                    deleting.set(None);
                    pager.refetch();
                }
                // e.g. clients still subscribed to the plan
                Err(e) => {
                    state.show_error(&e);
                    deleting.set(None);
                }
            }
            set_delete_busy.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Planes"</h1>
                    <p class="text-gray-400 mt-1">"Catálogo de planes de servicio"</p>
                </div>

                <button
                    on:click=move |_| modal.set(Modal::Create)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ Nuevo plan"
                </button>
            </div>

            // Create/edit dialog
            {move || match modal.get() {
                Modal::Closed => view! {}.into_view(),
                Modal::Create => view! {
                    <PlanModal plan=None pager=pager on_close=move || modal.set(Modal::Closed) />
                }.into_view(),
                Modal::Edit(plan) => view! {
                    <PlanModal plan=Some(plan) pager=pager on_close=move || modal.set(Modal::Closed) />
                }.into_view(),
            }}

            // Delete confirmation
            {move || {
                let confirm_delete = confirm_delete.clone();
                deleting.get().map(|plan| view! {
                    <ConfirmModal
                        title="Eliminar plan"
                        message=format!("¿Seguro que querés eliminar el plan {}?", plan.name)
                        busy=delete_busy
                        on_confirm=move || confirm_delete()
                        on_cancel=move || deleting.set(None)
                    />
                })
            }}

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count={PAGE_SIZE as usize} /> }.into_view();
                }

                let rows = plans.get();
                if rows.is_empty() {
                    return view! {
                        <div class="text-center py-12 text-gray-400">
                            "Todavía no hay planes cargados"
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="bg-gray-800 rounded-xl overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700/50 text-gray-400 text-left">
                                <tr>
                                    <th class="px-4 py-3">"Nombre"</th>
                                    <th class="px-4 py-3">"Velocidad"</th>
                                    <th class="px-4 py-3">"Precio"</th>
                                    <th class="px-4 py-3 text-right"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|plan| {
                                    let for_edit = plan.clone();
                                    let for_delete = plan.clone();
                                    view! {
                                        <tr class="border-t border-gray-700">
                                            <td class="px-4 py-3 font-medium">{plan.name.clone()}</td>
                                            <td class="px-4 py-3">{format!("{} Mbps", plan.speed_mbps)}</td>
                                            <td class="px-4 py-3">{format_amount(plan.price)}</td>
                                            <td class="px-4 py-3">
                                                <div class="flex items-center justify-end gap-2">
                                                    <button
                                                        on:click=move |_| modal.set(Modal::Edit(for_edit.clone()))
                                                        class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Editar"
                                                    </button>
                                                    <button
                                                        on:click=move |_| deleting.set(Some(for_delete.clone()))
                                                        class="px-3 py-1.5 bg-red-600/80 hover:bg-red-600
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Eliminar"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
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

/// Create or edit dialog; a successful save refetches the list
#[component]
fn PlanModal(
    plan: Option<Plan>,
    pager: PageState,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let plan_id = plan.as_ref().map(|plan| plan.id);
    let (name, set_name) = create_signal(
        plan.as_ref().map(|plan| plan.name.clone()).unwrap_or_default(),
    );
    let (speed, set_speed) = create_signal(
        plan.as_ref()
            .map(|plan| plan.speed_mbps.to_string())
            .unwrap_or_default(),
    );
    let (price, set_price) = create_signal(
        plan.as_ref()
            .map(|plan| plan.price.to_string())
            .unwrap_or_default(),
    );
    let (saving, set_saving) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = match parse_plan_input(&name.get(), &speed.get(), &price.get()) {
            Ok(input) => input,
            Err(message) => {
                state.show_error(message);
                return;
            }
        };

        set_saving.set(true);
        let state = state.clone();
        let on_close = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match plan_id {
                Some(id) => api::update_plan(id, &input).await,
                None => api::create_plan(&input).await,
            };

            match result {
                Ok(_) => {
                    state.show_success(if plan_id.is_some() {
                        "Plan actualizado"
                    } else {
                        "Plan creado"
                    });
                    pager.refetch();
                    on_close();
                }
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">
                        {if plan_id.is_some() { "Editar plan" } else { "Nuevo plan" }}
                    </h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Nombre"</label>
                        <input
                            type="text"
                            placeholder="p. ej. Fibra 100"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Velocidad (Mbps)"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || speed.get()
                            on:input=move |ev| set_speed.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Precio mensual"</label>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                                   font-medium transition-colors"
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            disabled=move || saving.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_plan_parses() {
        let input = parse_plan_input("Fibra 100", "100", "9500.50").unwrap();
        assert_eq!(input.name, "Fibra 100");
        assert_eq!(input.speed_mbps, 100);
        assert_eq!(input.price, 9500.50);
    }

    #[test]
    fn test_name_is_required() {
        assert!(parse_plan_input("  ", "100", "9500").is_err());
    }

    #[test]
    fn test_speed_must_be_a_positive_integer() {
        assert!(parse_plan_input("Fibra", "rápido", "9500").is_err());
        assert!(parse_plan_input("Fibra", "0", "9500").is_err());
        assert!(parse_plan_input("Fibra", "12.5", "9500").is_err());
    }

    #[test]
    fn test_price_must_be_a_number() {
        assert!(parse_plan_input("Fibra", "100", "").is_err());
        assert!(parse_plan_input("Fibra", "100", "caro").is_err());
        assert!(parse_plan_input("Fibra", "100", "-1").is_err());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let input = parse_plan_input(" Fibra 300 ", " 300 ", " 12000 ").unwrap();
        assert_eq!(input.name, "Fibra 300");
        assert_eq!(input.speed_mbps, 300);
        assert_eq!(input.price, 12000.0);
    }
}
