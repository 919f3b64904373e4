use crate::statistics::structs::advertise_info::AdvertiseInfo;

impl AdvertiseInfo {
    pub fn is_valid(&self) -> bool
    {
        !self.name.trim().is_empty()
    }
}
