/// Rich-text editing surface. Opaque to the core apart from its current HTML value.
pub trait EditingSurface: Send {
    /// Current HTML produced by the surface.
    fn value(&self) -> String;

    /// Replace the surface content.
    fn load(&mut self, html: &str);

    fn clear(&mut self) {
        self.load("");
    }
}
