pub mod footer;
pub mod header;
pub mod popover;
pub mod scrollbar;
pub mod table;

#[cfg(test)]
pub mod tests {
    use ratatui::buffer::Buffer;

    /// Flattens a rendered buffer into plain text for assertions.
    pub fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();

        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }

        text
    }
}
