/// Outcome of reading one end of a [`Deque`](crate::Deque).
///
/// When `is_valid()` is false the deque was empty and `value()` is only the
/// configured placeholder. Equality takes the flag into account, so a missing
/// item never equals a found one with the same number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DequeItem {
    valid: bool,
    value: i32,
}

impl DequeItem {
    pub fn found(value: i32) -> Self {
        Self { valid: true, value }
    }

    pub fn missing(placeholder: i32) -> Self {
        Self {
            valid: false,
            value: placeholder,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn into_option(self) -> Option<i32> {
        self.valid.then(|| self.value)
    }
}

impl From<DequeItem> for Option<i32> {
    fn from(item: DequeItem) -> Self {
        item.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::DequeItem;

    #[test]
    fn missing_never_equals_found() {
        assert_ne!(DequeItem::missing(0), DequeItem::found(0));
        assert_eq!(DequeItem::missing(0).into_option(), None);
        assert_eq!(Option::<i32>::from(DequeItem::found(0)), Some(0));
    }
}
