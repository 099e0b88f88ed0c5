//! Client Edit
//!
//! One client's contact data, subscription panel and account deletion. The
//! detail, the subscriptions and the plan catalog are fetched side by side.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::api;
use crate::api::types::{
    format_amount, non_empty, Plan, Subscription, SubscriptionStatus, UserDetail, UserUpdate,
};
use crate::components::{ConfirmModal, Loading};
use crate::state::global::GlobalState;

/// The subscription the panel operates on: the one not yet cancelled
fn current_subscription(subscriptions: &[Subscription]) -> Option<&Subscription> {
    subscriptions
        .iter()
        .find(|subscription| subscription.status != SubscriptionStatus::Cancelled)
}

/// Admin client edit page component
#[component]
pub fn ClientEdit() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let user_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()))
    });

    let detail = create_rw_signal(None::<UserDetail>);
    let subscriptions = create_rw_signal(None::<Vec<Subscription>>);
    let plans = create_rw_signal(Vec::<Plan>::new());

    // The three fetches are independent, so they run side by side
    let state_for_fetch = state;
    create_effect(move |_| {
        let id = match user_id.get() {
            Some(id) => id,
            None => return,
        };

        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_user(id).await {
                Ok(result) => detail.set(Some(result)),
                Err(e) => state.show_error(&e),
            }
        });

        let state = state_for_fetch.clone();
        spawn_local(async move {
            match api::fetch_user_subscriptions(id).await {
                Ok(result) => subscriptions.set(Some(result)),
                Err(e) => state.show_error(&e),
            }
        });

        let state = state_for_fetch.clone();
        spawn_local(async move {
            // The plan catalog is small; one large page covers it
            match api::fetch_plans(1, 100).await {
                Ok(result) => plans.set(result.items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            {move || match detail.get() {
                Some(record) => {
                    let id = record.id;
                    view! {
                        <div>
                            <h1 class="text-3xl font-bold">
                                {format!("{} {}", record.firstname, record.lastname)}
                            </h1>
                            <p class="text-gray-400 mt-1">
                                {format!("Usuario {} · DNI {}", record.username, record.dni)}
                            </p>
                        </div>

                        <ContactForm detail=record />
                        <SubscriptionPanel user_id=id subscriptions=subscriptions plans=plans />
                        <DangerZone user_id=id />
                    }.into_view()
                }
                None => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

/// Contact data form, prefilled from the fetched record
#[component]
fn ContactForm(detail: UserDetail) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let user_id = detail.id;
    let (email, set_email) = create_signal(detail.email);
    let (firstname, set_firstname) = create_signal(detail.firstname);
    let (lastname, set_lastname) = create_signal(detail.lastname);
    let (address, set_address) = create_signal(detail.address.unwrap_or_default());
    let (barrio, set_barrio) = create_signal(detail.barrio.unwrap_or_default());
    let (city, set_city) = create_signal(detail.city.unwrap_or_default());
    let (phone, set_phone) = create_signal(detail.phone.unwrap_or_default());
    let (phone2, set_phone2) = create_signal(detail.phone2.unwrap_or_default());
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let update = UserUpdate {
            email: email.get(),
            firstname: firstname.get(),
            lastname: lastname.get(),
            address: non_empty(address.get()),
            barrio: non_empty(barrio.get()),
            city: non_empty(city.get()),
            phone: non_empty(phone.get()),
            phone2: non_empty(phone2.get()),
        };

        if update.email.trim().is_empty()
            || update.firstname.trim().is_empty()
            || update.lastname.trim().is_empty()
        {
            state.show_error("Email, nombre y apellido son obligatorios");
            return;
        }

        set_saving.set(true);
        let state = state.clone();
        spawn_local(async move {
            match api::update_user(user_id, &update).await {
                Ok(_) => state.show_success("Datos actualizados"),
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Datos de contacto"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Nombre" value=firstname set_value=set_firstname />
                    <Field label="Apellido" value=lastname set_value=set_lastname />
                </div>
                <Field label="Email" value=email set_value=set_email />
                <Field label="Dirección" value=address set_value=set_address />
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Barrio" value=barrio set_value=set_barrio />
                    <Field label="Ciudad" value=city set_value=set_city />
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label="Teléfono" value=phone set_value=set_phone />
                    <Field label="Teléfono alternativo" value=phone2 set_value=set_phone2 />
                </div>

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar cambios" }}
                </button>
            </form>
        </section>
    }
}

/// Current subscription with a status select, or a plan picker when the
/// client has none
#[component]
fn SubscriptionPanel(
    user_id: u32,
    subscriptions: RwSignal<Option<Vec<Subscription>>>,
    plans: RwSignal<Vec<Plan>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (selected_plan, set_selected_plan) = create_signal(None::<u32>);
    let (busy, set_busy) = create_signal(false);

    let state_for_status = state.clone();
    let on_status = move |subscription_id: u32, value: String| {
        let status = match SubscriptionStatus::parse(&value) {
            Some(status) => status,
            None => return,
        };

        set_busy.set(true);
        let state = state_for_status.clone();
        spawn_local(async move {
            match api::update_subscription_status(subscription_id, status).await {
                Ok(updated) => {
                    subscriptions.update(|list| {
                        if let Some(list) = list {
                            if let Some(entry) =
                                list.iter_mut().find(|entry| entry.id == updated.id)
                            {
                                *entry = updated;
                            }
                        }
                    });
                    state.show_success("Suscripción actualizada");
                }
                Err(e) => state.show_error(&e),
            }
            set_busy.set(false);
        });
    };

    let state_for_assign = state;
    let on_assign = move |_| {
        let plan_id = match selected_plan.get() {
            Some(plan_id) => plan_id,
            None => {
                state_for_assign.show_error("Elegí un plan para asignar");
                return;
            }
        };

        set_busy.set(true);
        let state = state_for_assign.clone();
        spawn_local(async move {
            match api::assign_subscription(user_id, plan_id).await {
                Ok(created) => {
                    subscriptions.update(|list| {
                        if let Some(list) = list {
                            list.push(created);
                        }
                    });
                    set_selected_plan.set(None);
                    state.show_success("Plan asignado");
                }
                // e.g. an active subscription already exists
                Err(e) => state.show_error(&e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Suscripción"</h2>

            {move || {
                let list = match subscriptions.get() {
                    Some(list) => list,
                    None => return view! { <Loading /> }.into_view(),
                };

                match current_subscription(&list) {
                    Some(subscription) => {
                        let subscription_id = subscription.id;
                        let status = subscription.status;
                        let on_status = on_status.clone();

                        view! {
                            <div class="flex flex-wrap items-center justify-between gap-4">
                                <div>
                                    <p class="font-medium">{subscription.plan.name.clone()}</p>
                                    <p class="text-sm text-gray-400">
                                        {format!(
                                            "{} Mbps · {} por mes",
                                            subscription.plan.speed_mbps,
                                            format_amount(subscription.plan.price),
                                        )}
                                    </p>
                                </div>

                                <select
                                    on:change=move |ev| on_status(subscription_id, event_target_value(&ev))
                                    prop:value=status.as_str()
                                    disabled=move || busy.get()
                                    class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                                           focus:border-primary-500 focus:outline-none"
                                >
                                    {SubscriptionStatus::ALL.iter().map(|option| view! {
                                        <option value=option.as_str() selected={*option == status}>
                                            {option.label()}
                                        </option>
                                    }).collect_view()}
                                </select>
                            </div>
                        }.into_view()
                    }
                    None => {
                        let on_assign = on_assign.clone();

                        view! {
                            <p class="text-sm text-gray-400 mb-4">"El cliente no tiene un plan asignado"</p>
                            <div class="flex flex-wrap gap-3">
                                <select
                                    on:change=move |ev| set_selected_plan.set(event_target_value(&ev).parse().ok())
                                    class="flex-1 min-w-48 bg-gray-700 rounded-lg px-4 py-2
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                >
                                    <option value="">"Elegir plan..."</option>
                                    {plans.get().into_iter().map(|plan| view! {
                                        <option value=plan.id.to_string()>
                                            {format!(
                                                "{} · {} Mbps · {}",
                                                plan.name, plan.speed_mbps, format_amount(plan.price),
                                            )}
                                        </option>
                                    }).collect_view()}
                                </select>

                                <button
                                    on:click=on_assign
                                    disabled=move || busy.get()
                                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                           rounded-lg font-medium transition-colors"
                                >
                                    "Asignar"
                                </button>
                            </div>
                        }.into_view()
                    }
                }
            }}
        </section>
    }
}

/// Account deletion behind a confirmation dialog
#[component]
fn DangerZone(user_id: u32) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (show_confirm, set_show_confirm) = create_signal(false);
    let (deleting, set_deleting) = create_signal(false);

    let on_confirm = move || {
        set_deleting.set(true);
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_user(user_id).await {
                Ok(()) => {
                    state.show_success("Cliente eliminado");
                    navigate("/admin/clients", Default::default());
                }
                // e.g. trying to delete the own account
                Err(e) => {
                    state.show_error(&e);
                    set_show_confirm.set(false);
                }
            }
            set_deleting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 border border-red-500/30">
            <h2 class="text-xl font-semibold mb-2">"Eliminar cliente"</h2>
            <p class="text-sm text-gray-400 mb-4">
                "Se borra la cuenta con sus suscripciones. Esta acción no se puede deshacer."
            </p>
            <button
                on:click=move |_| set_show_confirm.set(true)
                class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg
                       font-medium transition-colors"
            >
                "Eliminar cliente"
            </button>

            {move || show_confirm.get().then(|| {
                let on_confirm = on_confirm.clone();
                view! {
                    <ConfirmModal
                        title="Eliminar cliente"
                        message="¿Seguro que querés eliminar este cliente?"
                        busy=deleting
                        on_confirm=move || on_confirm()
                        on_cancel=move || set_show_confirm.set(false)
                    />
                }
            })}
        </section>
    }
}

#[component]
fn Field(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Plan;

    fn subscription(id: u32, status: SubscriptionStatus) -> Subscription {
        Subscription {
            id,
            status,
            plan: Plan {
                id: 1,
                name: "Fibra 100".to_string(),
                speed_mbps: 100,
                price: 9500.0,
            },
        }
    }

    #[test]
    fn test_cancelled_subscriptions_are_skipped() {
        let list = vec![
            subscription(1, SubscriptionStatus::Cancelled),
            subscription(2, SubscriptionStatus::Active),
        ];
        assert_eq!(current_subscription(&list).map(|s| s.id), Some(2));
    }

    #[test]
    fn test_suspended_counts_as_current() {
        let list = vec![subscription(3, SubscriptionStatus::Suspended)];
        assert_eq!(current_subscription(&list).map(|s| s.id), Some(3));
    }

    #[test]
    fn test_no_current_subscription() {
        assert!(current_subscription(&[]).is_none());
        let list = vec![subscription(1, SubscriptionStatus::Cancelled)];
        assert!(current_subscription(&list).is_none());
    }
}
