//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Classdock Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Classdock"
# width = 1280           # 400-7680
# height = 800           # 300-4320
# start_maximized = false

[layout]
# header_height = 48     # 0-200
# sidebar_width = 280    # 0-800
# sidebar_open = false

[timing]
# Waits around a view switch, in milliseconds (0-2000). The window does
# not repaint during these, so leave them at 0 unless views render blank
# after switching.
# detach_settle_ms = 0
# attach_settle_ms = 0

[startup]
# max_concurrent_creates = 4   # 1-16
# initial_app = "lms"

[logging]
# level = "info"         # trace, debug, info, warn, error

[external_links]
# Regular expressions; matching new-window links open in the system handler.
# patterns = ["^zoommtg://", "^msteams:"]

# Standard apps, in sidebar order. Defining any [[apps]] entry replaces
# the built-in list.
#
# [[apps]]
# id = "lms"
# url = "https://lms.school.example/"
# title = "Courses"
# visible = true
"##
    .to_string()
}
