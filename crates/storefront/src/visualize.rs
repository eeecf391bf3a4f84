//! Places an artwork on a room template with a chosen frame, scale and
//! pixel nudge.

use catalog::Catalog;
use shared::{
    domain::{Artwork, ArtworkId, FrameId, FrameOption, NudgeDirection, RoomId, RoomTemplate},
    protocol::{ArtworkSummary, FrameEnvelope, Offset, OverlayLayout, VisualizerView},
};

use crate::error::FlowError;

pub const MIN_SIZE_PERCENT: u32 = 50;
pub const MAX_SIZE_PERCENT: u32 = 150;
pub const DEFAULT_SIZE_PERCENT: u32 = 100;
pub const NUDGE_STEP_PX: i32 = 5;
const WHITE_FRAME_MATTE: &str = "#f8f8f8";

#[derive(Debug, Clone, PartialEq)]
pub struct Visualizer {
    room: RoomTemplate,
    artwork: Artwork,
    frame: FrameOption,
    size_percent: u32,
    offset: Offset,
}

impl Visualizer {
    /// First room, first artwork, no frame, 100% scale, centered.
    pub fn new(catalog: &Catalog) -> Result<Self, FlowError> {
        let room = catalog
            .rooms()
            .first()
            .ok_or(FlowError::CatalogIncomplete("rooms"))?;
        let artwork = catalog
            .artworks()
            .first()
            .ok_or(FlowError::CatalogIncomplete("artworks"))?;
        let frame = catalog
            .frame(FrameId::default())
            .ok_or(FlowError::CatalogIncomplete("default frame"))?;
        Ok(Self {
            room: room.clone(),
            artwork: artwork.clone(),
            frame: frame.clone(),
            size_percent: DEFAULT_SIZE_PERCENT,
            offset: Offset::default(),
        })
    }

    pub fn room(&self) -> &RoomTemplate {
        &self.room
    }

    pub fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    pub fn frame(&self) -> &FrameOption {
        &self.frame
    }

    pub fn size_percent(&self) -> u32 {
        self.size_percent
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Switching rooms re-centers the artwork on the new anchor.
    pub fn select_room(&mut self, catalog: &Catalog, id: RoomId) -> Result<(), FlowError> {
        let room = catalog.room(id).ok_or(FlowError::UnknownRoom(id))?;
        self.room = room.clone();
        self.offset = Offset::default();
        Ok(())
    }

    pub fn select_artwork(&mut self, catalog: &Catalog, id: ArtworkId) -> Result<(), FlowError> {
        let artwork = catalog.artwork(id).ok_or(FlowError::UnknownArtwork(id))?;
        self.artwork = artwork.clone();
        Ok(())
    }

    pub fn select_frame(&mut self, catalog: &Catalog, id: FrameId) -> Result<(), FlowError> {
        let frame = catalog.frame(id).ok_or(FlowError::UnknownFrame(id))?;
        self.frame = frame.clone();
        Ok(())
    }

    pub fn set_size(&mut self, percent: u32) -> Result<(), FlowError> {
        if !(MIN_SIZE_PERCENT..=MAX_SIZE_PERCENT).contains(&percent) {
            return Err(FlowError::SizeOutOfRange(percent));
        }
        self.size_percent = percent;
        Ok(())
    }

    pub fn nudge(&mut self, direction: NudgeDirection) -> Offset {
        let Offset { x, y } = &mut self.offset;
        match direction {
            NudgeDirection::Up => *y = y.saturating_sub(NUDGE_STEP_PX),
            NudgeDirection::Down => *y = y.saturating_add(NUDGE_STEP_PX),
            NudgeDirection::Left => *x = x.saturating_sub(NUDGE_STEP_PX),
            NudgeDirection::Right => *x = x.saturating_add(NUDGE_STEP_PX),
        }
        self.offset
    }

    pub fn reset_position(&mut self) {
        self.offset = Offset::default();
    }

    pub fn layout(&self) -> OverlayLayout {
        compose(&self.room, &self.frame, self.size_percent, self.offset)
    }

    pub fn view(&self, catalog: &Catalog) -> VisualizerView {
        VisualizerView {
            room: self.room.clone(),
            artwork: ArtworkSummary::from(&self.artwork),
            frame: self.frame.clone(),
            size_percent: self.size_percent,
            offset: self.offset,
            layout: self.layout(),
            rooms: catalog.rooms().to_vec(),
            frames: catalog.frames().to_vec(),
        }
    }
}

/// Overlay geometry for an artwork hung at `room`'s anchor.
///
/// Width scales linearly with `size_percent`; the offset is applied in
/// pixels on top of the percentage position.
pub fn compose(room: &RoomTemplate, frame: &FrameOption, size_percent: u32, offset: Offset) -> OverlayLayout {
    let anchor = room.anchor;
    let width_percent = anchor.width_percent * f64::from(size_percent) / 100.0;
    let matte = frame
        .border_color
        .eq_ignore_ascii_case("#ffffff")
        .then(|| WHITE_FRAME_MATTE.to_string());
    let envelope = FrameEnvelope {
        border_width: frame.border_width,
        border_color: frame.border_color.clone(),
        padding: frame.padding,
        matte,
    };

    let border = if envelope.border_width > 0 {
        format!("{}px solid {}", envelope.border_width, envelope.border_color)
    } else {
        "none".to_string()
    };
    let mut css = format!(
        "top: calc({}% + {}px); left: calc({}% + {}px); width: {}%; border: {}; padding: {}px;",
        anchor.top_percent, offset.y, anchor.left_percent, offset.x, width_percent, border, envelope.padding
    );
    if let Some(matte) = &envelope.matte {
        css.push_str(&format!(" background-color: {matte};"));
    }

    OverlayLayout {
        top_percent: anchor.top_percent,
        left_percent: anchor.left_percent,
        width_percent,
        offset,
        envelope,
        css,
    }
}

#[cfg(test)]
#[path = "tests/visualize_tests.rs"]
mod tests;
