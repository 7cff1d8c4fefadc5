pub const POSITIVE_FEEDBACK: &[&str] = &[
    "Project structure is easy to navigate",
    "Dependencies are declared in a single manifest",
    "Code is split into multiple files instead of one large script",
];

pub const SENIOR_NOTES: &str = "Solid foundation. Focus on naming, keeping modules small and \
separating concerns before the codebase grows; those habits pay off most in team projects.";

pub const IDENTIFIER_TITLE: &str = "Use descriptive identifier names";
pub const IDENTIFIER_REASON: &str = "Cryptic names slow down readers and make collaboration harder";

pub const LONG_LINES_TITLE: &str = "Break up long lines";
pub const LONG_LINES_REASON: &str = "Long lines are hard to read in reviews and side-by-side diffs";

pub const ENV_EXAMPLE_TITLE: &str = "Add an example environment file";
pub const ENV_EXAMPLE_SUGGESTION: &str = "Commit a .env.example that lists every required variable without real values.";
pub const ENV_EXAMPLE_REASON: &str = "New contributors can configure the project without guessing";

pub const ROUTING_TITLE: &str = "Separate routing from controller logic";
pub const ROUTING_SUGGESTION: &str = "Move request handling out of route files into dedicated controllers and keep routes as thin wiring.";
pub const ROUTING_REASON: &str = "Handlers written inline in route files are hard to test and reuse";
