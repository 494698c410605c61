/// Where on the page a notice is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTarget {
    Sidebar,
    Main,
}
