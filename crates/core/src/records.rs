//! Composite records
//!
//! A `Person` groups a name and an age. Records live by value inside a
//! `Vec`, so `people[1].age = 26` changes only that element.

use crate::error::CoreError;
use crate::format;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.age)
    }
}

pub fn initial_people() -> Vec<Person> {
    vec![
        Person::new("Alice", 18),
        Person::new("Mad Hatter", 34),
        Person::new("Cheshire Cat", 40),
    ]
}

/// Overwrite the age of the record at `index`.
pub fn set_age(people: &mut [Person], index: usize, age: u32) -> Result<(), CoreError> {
    let len = people.len();
    let person = people
        .get_mut(index)
        .ok_or(CoreError::IndexOutOfBounds { index, len })?;
    person.age = age;
    Ok(())
}

/// Build the three records and set the second one's age to 26.
pub fn demonstrate() -> Result<Vec<Person>, CoreError> {
    let mut people = initial_people();
    set_age(&mut people, 1, 26)?;
    Ok(people)
}

/// `People slice: [{Alice 18} {Mad Hatter 26} {Cheshire Cat 40}]`
pub fn render(people: &[Person]) -> String {
    format!("People slice: {}", format::seq(people))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_second_record_changes() {
        let before = initial_people();
        let after = demonstrate().unwrap();

        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].age, 26);
        assert_eq!(after[1].name, "Mad Hatter");
    }

    #[test]
    fn test_set_age_out_of_range() {
        let mut people = initial_people();
        assert_eq!(
            set_age(&mut people, 3, 1),
            Err(CoreError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(people, initial_people());
    }

    #[test]
    fn test_render() {
        let people = demonstrate().unwrap();
        assert_eq!(
            render(&people),
            "People slice: [{Alice 18} {Mad Hatter 26} {Cheshire Cat 40}]"
        );
    }
}
