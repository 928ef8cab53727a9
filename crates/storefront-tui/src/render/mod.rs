//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use storefront_app::product_list::grid_columns;
use storefront_app::state::AppState;
use storefront_app::ListBranch;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// The only state written here is the grid column count, which key
/// handling needs for vertical focus moves.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let mut header = widgets::MainHeader::new(&state.catalog_name, icons);
    if let ListBranch::Ready(products) = state.list_branch() {
        header = header.with_product_count(products.len());
    }
    frame.render_widget(header, areas.header);

    state.grid_columns = grid_columns(areas.content.width);

    let list = widgets::ProductList::new(state.list_branch(), &state.settings.ui, icons)
        .columns(state.grid_columns)
        .focused(state.focused)
        .animation_frame(state.animation_frame);
    frame.render_widget(list, areas.content);

    frame.render_widget(
        widgets::StatusLine::new(state.ui_mode(), state.notice.as_ref()),
        areas.status,
    );

    // Detail view goes last so it covers the grid
    if let Some(props) = state.detail_props() {
        frame.render_widget(
            widgets::ProductDetail::new(props, &state.settings.ui.currency_symbol, icons),
            area,
        );
    }
}
