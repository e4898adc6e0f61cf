use core::{
    fmt::{Debug, Formatter},
    mem,
};

use bytemuck::Zeroable;

/// A container that holds either a value of type `T` or nothing.
///
/// Presence is tracked by an explicit flag rather than by reserving a
/// value of `T`, so every value of `T` (its default included) can be
/// stored. While absent, the slot always holds `T::default()` and never
/// a stale value left behind by an earlier `set`.
///
/// # Copies are shallow
///
/// [`Optional::from_ref`] and [`Optional::to_boxed`] copy the value with
/// [`Clone::clone`] and nothing more. For value types (`i32`, `String`,
/// `Vec<T>`, plain structs) the copy is independent of the container. For
/// handle types (`Rc<RefCell<_>>`, `Arc<Mutex<_>>`, `&T`, channel
/// senders, shared closures) only the handle is duplicated: mutating the
/// resource *through* the copy is visible from the container, while
/// replacing the handle itself is not.
///
/// The container is not synchronized; concurrent mutation needs an
/// external lock around the whole value.
#[derive(Clone, Copy)]
pub struct Optional<T> {
    /// Held value, or `T::default()` when absent.
    value: T,

    /// Single source of truth for presence.
    present: bool,
}

/// Types whose all-zero bit pattern is their `Default` value.
///
/// Only containers of these types can be zero-initialized, so that a
/// zeroed `Optional<T>` holds `T::default()` like any other absent one.
///
/// # Safety
///
/// Implementors must guarantee that `T::zeroed()` equals `T::default()`.
pub unsafe trait ZeroDefault: Zeroable + Default {}

// Convenience macro to implement the `ZeroDefault` trait for common types.
macro_rules! imp_zero_default {
    ( $($type:ty),* ) => {
        $(
            unsafe impl ZeroDefault for $type {}
        )*
    };
}

imp_zero_default!(
    bool, char, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64, usize, isize
);

unsafe impl<T: ZeroDefault, const N: usize> ZeroDefault for [T; N] where [T; N]: Zeroable + Default {}

// SAFETY: an all-zero `bool` is `false` and an all-zero `T` is
// `T::default()`, so a zeroed `Optional<T>` is a regular absent container.
unsafe impl<T: ZeroDefault> Zeroable for Optional<T> {}

impl<T> Optional<T> {
    /// Creates a container holding `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            present: true,
        }
    }

    /// Indicates whether the container is absent.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.present
    }

    /// Indicates whether the container holds a value.
    #[inline(always)]
    pub const fn is_present(&self) -> bool {
        self.present
    }

    /// Returns the slot together with the presence flag.
    ///
    /// When absent the slot is `T::default()`, so the result is
    /// `(&T::default(), false)`.
    #[inline(always)]
    pub const fn get(&self) -> (&T, bool) {
        (&self.value, self.present)
    }

    /// Returns a reference to the contained value as an `Option`.
    #[inline(always)]
    pub fn as_ref(&self) -> Option<&T> {
        if self.present {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the contained value as an `Option`.
    #[inline(always)]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        if self.present {
            Some(&mut self.value)
        } else {
            None
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.present.then_some(self.value)
    }

    /// Returns the contained value, or `default` when absent.
    #[inline]
    pub fn or(self, default: T) -> T {
        if self.present {
            self.value
        } else {
            default
        }
    }

    /// Stores `value`, making the container present.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.present = true;
    }

    /// Returns a freshly boxed shallow copy of the value, or `None` when
    /// absent.
    ///
    /// Each call allocates a new box. Writing through the box never
    /// touches the container's slot, but for handle types the box and the
    /// slot still designate the same underlying resource.
    #[inline]
    pub fn to_boxed(&self) -> Option<Box<T>>
    where
        T: Clone,
    {
        self.as_ref().map(|value| Box::new(value.clone()))
    }
}

impl<T: Default> Optional<T> {
    /// Creates an absent container.
    #[inline]
    pub fn empty() -> Self {
        Self {
            value: T::default(),
            present: false,
        }
    }

    /// Creates a container from an optional reference.
    ///
    /// `None` gives an absent container; otherwise the container holds a
    /// shallow copy of the referenced value taken at the time of the call.
    #[inline]
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(value) => Self::new(value.clone()),
            None => Self::empty(),
        }
    }

    /// Makes the container absent, resetting the slot to `T::default()`.
    ///
    /// Calling it on an absent container has no observable effect.
    #[inline]
    pub fn unset(&mut self) {
        self.value = T::default();
        self.present = false;
    }

    /// Moves the value out, leaving the container absent.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if !self.present {
            return None;
        }

        self.present = false;
        Some(mem::take(&mut self.value))
    }

    /// Stores `value` and returns the previously held value, if any.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.take();
        self.set(value);
        previous
    }
}

impl<T: Default> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Default> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::empty(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}
