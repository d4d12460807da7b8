//! Store fixtures.
//!
//! `main` (menu 1):
//! ```text
//! Home(1)
//! About(2)
//!   Team(4)
//!     Alice(6)
//!     Bob(7)
//!   History(5)
//! Blog(3)
//!   Archive(8)
//! ```
//! `footer` (menu 2): Legal(20), plus Imprint(21) hanging off Team(4).

pub const TWO_MENUS: &str = r#"
[[menus]]
id = 1
name = "main"

[[menus]]
id = 2
name = "footer"

[[items]]
id = 1
name = "Home"
menu = 1

[[items]]
id = 2
name = "About"
menu = 1

[[items]]
id = 3
name = "Blog"
menu = 1

[[items]]
id = 4
name = "Team"
menu = 1
parent = 2

[[items]]
id = 5
name = "History"
menu = 1
parent = 2

[[items]]
id = 6
name = "Alice"
menu = 1
parent = 4

[[items]]
id = 7
name = "Bob"
menu = 1
parent = 4

[[items]]
id = 8
name = "Archive"
menu = 1
parent = 3

[[items]]
id = 20
name = "Legal"
menu = 2

[[items]]
id = 21
name = "Imprint"
menu = 2
parent = 4
"#;

#[allow(dead_code)]
pub const DUPLICATE_MENU_NAMES: &str = r#"
[[menus]]
id = 1
name = "main"

[[menus]]
id = 2
name = "main"
"#;
