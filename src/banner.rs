pub const BANNER: &str = r#"+--------------------------------------+
|          ESCAPE THE DUNGEON          |
+--------------------------------------+
"#;

pub const ENTRY: &str = r#"Welcome to 'Escape the Dungeon'!
You wake up in a dark, cold dungeon cell...
Type 'help' for available commands.
"#;

pub const INTERRUPTED: &str = "Game interrupted. Thanks for playing!";

pub const VICTORY: &str = r#"You are free! The sunlight blinds you as you step outside.
Your adventure ends here, but freedom is yours!"#;
