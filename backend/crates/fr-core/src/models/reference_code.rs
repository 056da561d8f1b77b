/// Row of a small lookup table, provisioned on first use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCode {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Default user type for self-registered accounts
pub const STUDENT_USER_TYPE: ReferenceCode = ReferenceCode {
    code: "estudiante",
    name: "Student",
    description: "Default role",
};

pub const ACTIVE_USER_STATUS: ReferenceCode = ReferenceCode {
    code: "activo",
    name: "Active",
    description: "Active user",
};

pub const PUBLISHED_CONTENT_STATE: ReferenceCode = ReferenceCode {
    code: "publicado",
    name: "Published",
    description: "Visible in the feed",
};

pub const LIKE_INTERACTION: ReferenceCode = ReferenceCode {
    code: "like",
    name: "Like",
    description: "Viewer liked the content",
};
