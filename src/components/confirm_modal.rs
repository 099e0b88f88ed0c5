//! Confirmation Modal
//!
//! Overlay dialog guarding destructive actions.

use leptos::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(into, default = String::from("Eliminar"))]
    confirm_label: String,
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: impl Fn() + 'static,
    on_cancel: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let on_cancel_for_x = on_cancel.clone();

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| on_cancel_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <p class="text-gray-300 mb-6">{message}</p>

                <div class="flex space-x-3">
                    <button
                        type="button"
                        on:click=move |_| on_cancel()
                        class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Cancelar"
                    </button>
                    <button
                        on:click=move |_| on_confirm()
                        disabled=move || busy.get()
                        class="flex-1 px-4 py-3 bg-red-600 hover:bg-red-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
