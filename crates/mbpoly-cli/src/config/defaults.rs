pub struct DefaultsConfig {
    pub precision: usize,
    pub delimiter: char,
    pub header: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            precision: 12,
            delimiter: ',',
            header: true,
        }
    }
}
