use crate::{CarefreePtr, CarefreePtrMut};

// -----------------------------------------------------------------------------
// Carefree

mod sealed {
    pub trait Sealed {}

    impl<T: ?Sized> Sealed for crate::CarefreePtr<'_, T> {}
    impl<T: ?Sized> Sealed for crate::CarefreePtrMut<'_, T> {}
}

/// Compile-time fact: the implementing type is a carefree handle.
///
/// Holds for every instantiation of [`CarefreePtr`] and [`CarefreePtrMut`]
/// and for nothing else; the trait is sealed. Container plumbing uses this
/// bound to accept the handles without the handles having to know about the
/// plumbing.
///
/// # Examples
///
/// ```
/// use cf_ptr::{Carefree, CarefreePtr, CarefreePtrMut};
///
/// fn assert_carefree<P: Carefree>() {}
///
/// assert_carefree::<CarefreePtr<'static, [u8]>>();
/// assert_carefree::<CarefreePtrMut<'static, i32>>();
/// ```
///
/// Bare pointers and plain owning types are not carefree handles:
///
/// ```compile_fail
/// fn assert_carefree<P: cf_ptr::Carefree>() {}
///
/// assert_carefree::<*mut i32>();
/// ```
pub trait Carefree: sealed::Sealed {}

impl<T: ?Sized> Carefree for CarefreePtr<'_, T> {}

impl<T: ?Sized> Carefree for CarefreePtrMut<'_, T> {}
