//! Polymorphism two ways
//!
//! `Animal` is a closed set of kinds: `speak` is an exhaustive `match`, so a
//! new kind cannot be added without giving it a response.
//!
//! `Mover` is an open capability: any record type that implements it can sit
//! in a `Vec<Box<dyn Mover>>` and be driven through dynamic dispatch.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Dog,
    Cat,
    Cow,
    Duck,
}

impl Animal {
    pub const ALL: [Animal; 4] = [Animal::Dog, Animal::Cat, Animal::Cow, Animal::Duck];

    pub fn name(self) -> &'static str {
        match self {
            Animal::Dog => "Dog",
            Animal::Cat => "Cat",
            Animal::Cow => "Cow",
            Animal::Duck => "Duck",
        }
    }

    pub fn speak(self) -> &'static str {
        match self {
            Animal::Dog => "Woof!",
            Animal::Cat => "Meow!",
            Animal::Cow => "Moo!",
            Animal::Duck => "Quack!",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} says {}", self.name(), self.speak())
    }
}

/// Anything that can describe how it moves.
pub trait Mover {
    fn movement(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub make: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    pub species: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fish {
    pub species: String,
}

impl Mover for Car {
    fn movement(&self) -> String {
        format!("The {} car drives on the road", self.make)
    }
}

impl Mover for Bird {
    fn movement(&self) -> String {
        format!("The {} flies through the sky", self.species)
    }
}

impl Mover for Fish {
    fn movement(&self) -> String {
        format!("The {} swims in the water", self.species)
    }
}

/// Ask every mover in the collection to move, in order.
pub fn move_all(movers: &[Box<dyn Mover>]) -> Vec<String> {
    movers.iter().map(|m| m.movement()).collect()
}

/// The mixed collection used by the concepts program
pub fn sample_movers() -> Vec<Box<dyn Mover>> {
    vec![
        Box::new(Car {
            make: "Toyota".to_string(),
        }),
        Box::new(Bird {
            species: "sparrow".to_string(),
        }),
        Box::new(Fish {
            species: "salmon".to_string(),
        }),
    ]
}
