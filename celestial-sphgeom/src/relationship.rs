/// How a region `A` relates to another region `B`, as returned by
/// `A.relate(&B)`.
///
/// Answers are conservative. `Disjoint`, `Contains` and `Within` are only
/// reported when they are certain; anything doubtful is `Intersects`. When
/// `A` and `B` coincide, `Contains` wins over `Within`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// `A` and `B` share no point.
    Disjoint,
    /// `A` and `B` may overlap; neither containment is established.
    Intersects,
    /// `A` contains every point of `B`.
    Contains,
    /// `A` lies entirely inside `B`.
    Within,
}

impl Relationship {
    #[inline]
    pub fn is_disjoint(self) -> bool {
        self == Relationship::Disjoint
    }

    #[inline]
    pub fn contains(self) -> bool {
        self == Relationship::Contains
    }

    /// The relationship seen from the other side: `B.relate(&A)`.
    pub fn invert(self) -> Self {
        match self {
            Relationship::Contains => Relationship::Within,
            Relationship::Within => Relationship::Contains,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert() {
        assert_eq!(Relationship::Contains.invert(), Relationship::Within);
        assert_eq!(Relationship::Within.invert(), Relationship::Contains);
        assert_eq!(Relationship::Disjoint.invert(), Relationship::Disjoint);
        assert_eq!(Relationship::Intersects.invert(), Relationship::Intersects);
    }

    #[test]
    fn test_predicates() {
        assert!(Relationship::Disjoint.is_disjoint());
        assert!(!Relationship::Intersects.is_disjoint());
        assert!(Relationship::Contains.contains());
        assert!(!Relationship::Within.contains());
    }
}
