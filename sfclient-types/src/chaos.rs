use crate::json::{ConversionError, JsonObject, ObjectReader, ObjectWriter};
use crate::wire_enum;

wire_enum! {
    pub enum ChaosStatus {
        #[default]
        Invalid => "Invalid",
        Running => "Running",
        Stopped => "Stopped",
    }
}

wire_enum! {
    pub enum ChaosScheduleStatus {
        #[default]
        Invalid => "Invalid",
        Stopped => "Stopped",
        Active => "Active",
        Expired => "Expired",
        Pending => "Pending",
    }
}

/// Whether Chaos is running, and the status of its schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chaos {
    pub status: Option<ChaosStatus>,
    pub schedule_status: Option<ChaosScheduleStatus>,
}

impl JsonObject for Chaos {
    fn read_properties(reader: &mut ObjectReader) -> Result<Self, ConversionError> {
        let mut chaos = Self::default();
        while let Some(property) = reader.next_property() {
            if property.is("Status") {
                chaos.status = property.read()?;
            } else if property.is("ScheduleStatus") {
                chaos.schedule_status = property.read()?;
            } else {
                property.skip();
            }
        }
        Ok(chaos)
    }

    fn write_properties(&self, writer: &mut ObjectWriter) -> Result<(), ConversionError> {
        writer.write_optional("Status", self.status.as_ref())?;
        writer.write_optional("ScheduleStatus", self.schedule_status.as_ref())
    }
}
