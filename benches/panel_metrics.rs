// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toggle panel transitions and size computation.

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use rapid_photo_downloader::ui::design_tokens::palette;
use rapid_photo_downloader::ui::toggle_panel::{PanelConfig, TogglePanel};
use std::hint::black_box;

fn panel() -> TogglePanel {
    let (mut panel, _) = TogglePanel::new(
        PanelConfig::new("Timeline", "timelinePanel")
            .display_alternate(true)
            .header_color(palette::HEADER_BACKGROUND),
    );
    panel.attach_content(Size::new(290.0, 160.0));
    panel
}

fn bench_toggle(c: &mut Criterion) {
    let mut panel = panel();
    let mut on = true;
    c.bench_function("toggle_panel_set_on", |b| {
        b.iter(|| {
            on = !on;
            black_box(panel.set_on(black_box(on)))
        })
    });
}

fn bench_size_hint(c: &mut Criterion) {
    let expanded = panel();
    c.bench_function("toggle_panel_size_hint_expanded", |b| {
        b.iter(|| black_box(expanded.size_hint()))
    });

    let mut collapsed = panel();
    collapsed.set_on(false);
    c.bench_function("toggle_panel_size_hint_collapsed", |b| {
        b.iter(|| black_box(collapsed.size_hint()))
    });
}

criterion_group!(benches, bench_toggle, bench_size_hint);
criterion_main!(benches);
