//! Items with a fixed role in the built-in character variants.
//!
//! Dragons, students, and teachers always carry the same weaknesses and
//! trade tables, and a zombie is only ever cured by the [`antidote`].

use crate::encounter::Transaction;
use crate::item::Item;

/// Name of the item that turns a zombie back into a student.
pub const ANTIDOTE: &str = "Antidote";

/// Cures zombies.
pub fn antidote() -> Item {
    Item::new(
        ANTIDOTE,
        "A vial of something that smells like cough syrup.",
        "being cured",
    )
}

/// A dragon weakness.
pub fn sword() -> Item {
    Item::new("Sword", "A gleaming sword.", "sharp swords")
}

/// A dragon weakness.
pub fn ice() -> Item {
    Item::new("Ice", "A block of ice that refuses to melt.", "the cold")
}

/// A student's weakness.
pub fn detention() -> Item {
    Item::new("Detention", "A pink detention slip.", "getting detention")
}

/// A teacher's weakness.
pub fn chaos() -> Item {
    Item::new("Chaos", "A jar of pure classroom chaos.", "an unruly class")
}

/// Sold by students.
pub fn homework() -> Item {
    Item::new("Homework", "Somebody else's homework.", "unfinished homework")
}

/// Bought by students.
pub fn pencil() -> Item {
    Item::new("Pencil", "A freshly sharpened pencil.", "blunt pencils")
}

/// Sold by teachers.
pub fn exam_results() -> Item {
    Item::new("Exam results", "A sealed envelope of exam results.", "bad grades")
}

/// Bought by teachers.
pub fn apple() -> Item {
    Item::new("Apple", "A shiny red apple.", "apples")
}

/// Weaknesses every dragon has.
pub fn dragon_weaknesses() -> Vec<Item> {
    vec![sword(), ice()]
}

/// Weaknesses every student has.
pub fn student_weaknesses() -> Vec<Item> {
    vec![detention()]
}

/// What every student will trade.
pub fn student_sells() -> Vec<Transaction> {
    vec![Transaction::new(homework(), pencil())]
}

/// Weaknesses every teacher has.
pub fn teacher_weaknesses() -> Vec<Item> {
    vec![chaos()]
}

/// What every teacher will trade.
pub fn teacher_sells() -> Vec<Transaction> {
    vec![Transaction::new(exam_results(), apple())]
}
