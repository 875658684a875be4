category_enum! {
    ///
    /// StorageType
    ///
    /// Storage tiers a block replica can live on, ordered from fastest to
    /// coldest. `Provided` covers replicas backed by an external store.
    ///
    pub enum StorageType {
        RamDisk => "RAM_DISK",
        Ssd => "SSD",
        Disk => "DISK",
        Archive => "ARCHIVE",
        Provided => "PROVIDED",
    }
}

impl StorageType {
    /// Returns `true` if the tier is volatile memory.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::RamDisk)
    }

    /// Returns `true` if replicas on this tier count against quota.
    #[must_use]
    pub const fn supports_quota(self) -> bool {
        !matches!(self, Self::Provided)
    }
}
