//! Boggle die representation
//!
//! A die has a fixed set of face labels and one face currently showing.

use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A lettered die
///
/// Face labels are immutable and shared between clones; the showing face is
/// tracked per instance, so rolling a copy never affects the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Die {
    faces: Arc<[String]>,
    current: usize,
}

/// Error type for invalid dice
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DieError {
    #[error("a die needs at least one face")]
    NoFaces,
}

impl Die {
    /// Create a die showing its first face
    ///
    /// # Errors
    /// Returns `DieError::NoFaces` if `faces` is empty.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::Die;
    ///
    /// let die = Die::new(["A", "B", "QU"]).unwrap();
    /// assert_eq!(die.current_face(), "A");
    ///
    /// assert!(Die::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(faces: I) -> Result<Self, DieError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let faces: Arc<[String]> = faces.into_iter().map(Into::into).collect();
        if faces.is_empty() {
            return Err(DieError::NoFaces);
        }

        Ok(Self { faces, current: 0 })
    }

    /// Roll the die, returning the face that lands up
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        self.current = rng.random_range(0..self.faces.len());
        &self.faces[self.current]
    }

    /// The face currently showing
    #[inline]
    #[must_use]
    pub fn current_face(&self) -> &str {
        &self.faces[self.current]
    }

    /// All face labels, in their fixed order
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[String] {
        &self.faces
    }

    /// Whether both dice currently show the same label
    ///
    /// Unlike `==`, this ignores the rest of each die's faces.
    #[must_use]
    pub fn shows_same_face(&self, other: &Self) -> bool {
        self.current_face() == other.current_face()
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.faces.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn die_creation_valid() {
        let die = Die::new(["A", "E", "QU"]).unwrap();
        assert_eq!(die.faces(), ["A", "E", "QU"]);
        assert_eq!(die.current_face(), "A");
    }

    #[test]
    fn die_creation_empty() {
        assert_eq!(Die::new(Vec::<&str>::new()), Err(DieError::NoFaces));
    }

    #[test]
    fn roll_lands_on_a_face() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut die = Die::new(["A", "B", "C", "D", "E", "F"]).unwrap();

        for _ in 0..100 {
            let face = die.roll(&mut rng).to_string();
            assert!(die.faces().contains(&face));
            assert_eq!(die.current_face(), face);
        }
    }

    #[test]
    fn roll_eventually_shows_every_face() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut die = Die::new(["A", "B", "C"]).unwrap();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(die.roll(&mut rng).to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_face_die() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut die = Die::new(["Z"]).unwrap();
        assert_eq!(die.roll(&mut rng), "Z");
    }

    #[test]
    fn clone_shares_faces_but_not_current_face() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = Die::new(["A", "B", "C", "D", "E", "F"]).unwrap();
        let mut copy = original.clone();

        assert!(Arc::ptr_eq(&original.faces, &copy.faces));

        while copy.current_face() == "A" {
            copy.roll(&mut rng);
        }
        assert_eq!(original.current_face(), "A");
    }

    #[test]
    fn equality_is_structural() {
        let a = Die::new(["A", "B"]).unwrap();
        let b = Die::new(["A", "C"]).unwrap();

        assert!(a.shows_same_face(&b));
        assert_ne!(a, b);
        assert_eq!(a, Die::new(["A", "B"]).unwrap());
    }

    #[test]
    fn display_lists_faces() {
        let die = Die::new(["U", "H", "QU"]).unwrap();
        assert_eq!(die.to_string(), "U, H, QU");
    }
}
