//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Stagehand Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[stage]
# Workspace the engine spawns into, cleans and owns.
workspace = 2

[compositor]
# socket_path = "/run/user/1000/hypr/<signature>/.socket.sock"
# timeout_ms = 2000

[polling]
# Correlation budget: attempts x interval_ms.
# attempts = 50          # 1-1000
# interval_ms = 100      # 10-5000

[launch]
# mode = "compositor_exec"   # or "direct"
# silent = true
# no_anim = true
# suppress_decorations = true
# terminal = "ghostty"
# terminal_config = "~/.config/stagehand/ghostty.conf"

[canvas]
# viewer = "imv"
# viewer_class = "imv"
# generated_image = ""       # empty: system temp dir
# fallback_width = 1920
# fallback_height = 1080
# zero_gaps = true

[logging]
# level = "stagehand=info"
"##
}
