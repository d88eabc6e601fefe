use leptos::prelude::*;
use thaw::*;

/// Yes / no question in a thaw dialog.
///
/// `open` is owned by the caller; closing through the mask or Escape counts
/// as cancel. `busy` disables the confirm button while its request runs.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: String,
    #[prop(optional, into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let model = RwSignal::new(open.get_untracked());
    Effect::new(move |_| model.set(open.get()));
    Effect::new(move |prev: Option<bool>| {
        let now = model.get();
        if prev == Some(true) && !now && open.get_untracked() {
            on_cancel.run(());
        }
        now
    });

    view! {
        <Dialog open=model>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p>{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=move |_| {
                                if !busy.get_untracked() {
                                    on_confirm.run(());
                                }
                            }
                        >
                            {confirm_label}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancelar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
