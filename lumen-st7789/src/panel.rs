//! Panel drawing surface
//!
//! Groups the transport and bulk engine with the panel geometry. Window
//! addressing, fills and glyph rendering are implemented on this type in
//! their own modules; [`Display`](crate::Display) gates them on the
//! session state.

use lumen_hal::{BulkChannel, OutputPin, SpiPeripheral};

use crate::bulk::BulkEngine;
use crate::config::PanelGeometry;
use crate::geometry::Rect;
use crate::transport::Transport;

pub struct Panel<'d, SPI, CS, DC, CH> {
    pub(crate) transport: Transport<SPI, CS, DC>,
    pub(crate) bulk: BulkEngine<'d, CH>,
    pub(crate) geometry: PanelGeometry,
}

impl<'d, SPI, CS, DC, CH> Panel<'d, SPI, CS, DC, CH>
where
    SPI: SpiPeripheral,
    CS: OutputPin,
    DC: OutputPin,
    CH: BulkChannel,
{
    pub fn new(
        transport: Transport<SPI, CS, DC>,
        bulk: BulkEngine<'d, CH>,
        geometry: PanelGeometry,
    ) -> Self {
        Self {
            transport,
            bulk,
            geometry,
        }
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// The whole visible area
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.geometry.width, self.geometry.height)
    }

    pub fn transport(&mut self) -> &mut Transport<SPI, CS, DC> {
        &mut self.transport
    }

    pub fn bulk(&self) -> &BulkEngine<'d, CH> {
        &self.bulk
    }

    /// Split back into parts
    pub fn into_parts(self) -> (Transport<SPI, CS, DC>, BulkEngine<'d, CH>) {
        (self.transport, self.bulk)
    }
}
