use leptos::prelude::*;

/// Inline, dismissible error message. Renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(
    message: ReadSignal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div class="error-message" role="alert">
                    <span class="error-text">{msg}</span>
                    <button
                        class="btn-small btn-dismiss"
                        title="Dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "\u{2715}"
                    </button>
                </div>
            }
        })
    }
}
