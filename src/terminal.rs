//! Canned terminal: answers shell-like commands with fixed transcripts.

const INSTALL_WORDS: [&str; 3] = ["install", "npm", "pip"];
const LIST_WORDS: [&str; 2] = ["ls", "dir"];

/// Respond to `command`. Matching is by whitespace-separated word and
/// checked in order: package install, directory listing, git, fallback.
pub fn respond(command: &str) -> String {
    let command = command.trim();
    if command.is_empty() {
        return String::new();
    }
    let words: Vec<&str> = command.split_whitespace().collect();
    let has = |set: &[&str]| words.iter().any(|w| set.contains(w));
    if has(&INSTALL_WORDS[..]) {
        format!("$ {command}\nResolving dependencies...\nadded 1 package in 0.8s\nInstallation complete.")
    } else if has(&LIST_WORDS[..]) {
        "index.js\npackage.json\nREADME.md\nnode_modules/\nsrc/".to_string()
    } else if has(&["git"][..]) {
        "On branch main\nYour branch is up to date with 'origin/main'.\n\nnothing to commit, working tree clean".to_string()
    } else {
        format!("Command executed: {command}")
    }
}
