use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, Context, FocusHandle, KeyBinding, Menu,
    TitlebarOptions, Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px,
    size,
};

use gpui_lumen::{
    LumenAssets, assets,
    components::{Avatar, Badge, Button, ButtonVariant, Card, Progress, Separator},
    theme::{self, FsPreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeSettings},
    views::Shell,
};

struct Showcase {
    focus_handle: FocusHandle,
    progress: f32,
}

actions!(window, [TabNext, TabPrev]);

impl Render for Showcase {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .tab_group()
            .track_focus(&self.focus_handle)
            .flex()
            .flex_col()
            .gap(px(16.))
            .p(px(16.))
            .child(
                Card::new()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(8.))
                            .child(Avatar::new().fallback("LM"))
                            .child(Badge::new("Welcome")),
                    )
                    .child(Separator::new())
                    .child(Progress::new().value(self.progress)),
            )
            .child(
                div()
                    .flex()
                    .gap(px(8.))
                    .child(Button::new("primary").text("Get Started").on_click(
                        cx.listener(|view, _event, _window, cx| {
                            view.progress = (view.progress + 10.).min(100.);
                            cx.notify();
                        }),
                    ))
                    .child(
                        Button::new("outline")
                            .variant(ButtonVariant::Outline)
                            .text("Outline"),
                    )
                    .child(
                        Button::new("ghost")
                            .variant(ButtonVariant::Ghost)
                            .text("Ghost"),
                    )
                    .child(
                        Button::new("destructive")
                            .variant(ButtonVariant::Destructive)
                            .text("Reset")
                            .on_click(cx.listener(|view, _event, _window, cx| {
                                view.progress = 0.;
                                cx.notify();
                            })),
                    ),
            )
    }
}

fn main() {
    env_logger::init();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![LumenAssets])
        .run(|cx: &mut App| {
            gpui_lumen::init(cx);

            let store: Arc<dyn PreferenceStore> = match FsPreferenceStore::in_config_dir("lumen")
            {
                Some(store) => Arc::new(store),
                // Hosts without a config directory keep the preference for
                // the session only.
                None => Arc::new(MemoryPreferenceStore::new()),
            };
            theme::init(ThemeSettings::new(store), cx);

            cx.set_menus(vec![Menu {
                name: "Lumen Showcase".into(),
                items: vec![],
            }]);

            let bounds = Bounds::centered(None, size(px(960.), px(720.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let showcase = cx.new(|cx| Showcase {
                        focus_handle: cx.focus_handle(),
                        progress: 30.,
                    });

                    cx.new(|cx| {
                        Shell::new(showcase, window, cx)
                            .title("Welcome to Lumen")
                            .subtitle("A themed component showcase")
                    })
                },
            )
            .unwrap();

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([KeyBinding::new("tab", TabNext, None)]);
    cx.bind_keys([KeyBinding::new("shift-tab", TabPrev, None)]);
}
