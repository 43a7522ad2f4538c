//! Account entitlement as seen by the presenter.

/// Tells whether the current viewer may see premium header descriptions.
#[cfg_attr(test, mockall::automock)]
pub trait Entitlement {
    fn is_paid_user(&self) -> bool;
}

impl Entitlement for bool {
    #[inline]
    fn is_paid_user(&self) -> bool {
        *self
    }
}

impl<T: Entitlement + ?Sized> Entitlement for &T {
    #[inline]
    fn is_paid_user(&self) -> bool {
        (**self).is_paid_user()
    }
}
