use cf_ptr::{CarefreePtr, CarefreePtrMut};

use crate::storage::{ElementStorage, ElementStorageMut, IntoElementStorage};

// -----------------------------------------------------------------------------
// Carefree handles as element storage

// Every lookup forwards to the bare slice of the same element type; the
// handles add no container behavior of their own.

impl<T> ElementStorage for CarefreePtr<'_, [T]> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        self.as_slice().element(index)
    }
}

impl<T> ElementStorage for CarefreePtrMut<'_, [T]> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn element(&self, index: usize) -> &T {
        self.as_slice().element(index)
    }
}

impl<T> ElementStorageMut for CarefreePtrMut<'_, [T]> {
    #[inline]
    fn element_mut(&mut self, index: usize) -> &mut T {
        self.as_mut_slice().element_mut(index)
    }
}

impl<T> IntoElementStorage for CarefreePtr<'_, [T]> {
    type Storage = Self;

    /// The handle already is the minimal reference unit to its elements; it
    /// moves in unchanged, whichever ownership branch it carries.
    #[inline(always)]
    fn into_element_storage(self) -> Self {
        self
    }
}

impl<T> IntoElementStorage for CarefreePtrMut<'_, [T]> {
    type Storage = Self;

    #[inline(always)]
    fn into_element_storage(self) -> Self {
        self
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use cf_ptr::{CarefreePtr, CarefreePtrMut};
    use cf_utils::counter;

    use super::{ElementStorage, ElementStorageMut, IntoElementStorage};
    use crate::mapped::{INVALID_INDEX, MappedContainer};

    #[test]
    fn handles_read_like_bare_slices() {
        let data = [3, 1, 4, 1, 5];
        let handle = CarefreePtr::from(&data);

        assert_eq!(ElementStorage::len(&handle), data.len());
        for i in counter(data.len()) {
            assert_eq!(handle.element(i), data.element(i));
        }
    }

    #[test]
    fn handles_move_in_as_their_own_storage() {
        let handle: CarefreePtr<'_, [i32]> = vec![7, 8].into();
        let storage = handle.into_element_storage();

        // still the same owning handle, not a wrapper around one
        assert!(storage.is_owning());
        assert_eq!(*storage.element(1), 8);
    }

    #[test]
    fn mapped_container_over_a_borrowed_handle() {
        let data = [0, 10, 20, 30];
        let mapping = [3usize, INVALID_INDEX, 0];

        let from_handle =
            MappedContainer::with_size(CarefreePtr::from(&data), &mapping, 3);
        let from_slice = MappedContainer::with_size(&data[..], &mapping, 3);

        for i in counter(3usize) {
            assert_eq!(from_handle[i], from_slice[i]);
        }
    }

    #[test]
    fn mapped_container_over_an_owned_handle() {
        let handle: CarefreePtr<'_, [i32]> = vec![5, 6, 7].into();
        let mapped = MappedContainer::new(handle, &[2usize, 1, 0]);

        let collected: Vec<i32> = mapped.iter().copied().collect();
        assert_eq!(collected, [7, 6, 5]);
    }

    #[test]
    fn writes_reach_the_borrowed_storage() {
        let mut data = [1, 2, 3];
        let mapping = [2usize, 0];

        {
            let handle = CarefreePtrMut::from(&mut data);
            let mut mapped = MappedContainer::with_size(handle, &mapping, 2);
            mapped[0] = 33;
            *mapped.try_element_mut(1).unwrap() = 11;
        }

        assert_eq!(data, [11, 2, 33]);
    }

    #[test]
    fn exclusive_handles_give_exclusive_elements() {
        let mut data = [9, 9];

        {
            let mut handle = CarefreePtrMut::from(&mut data);
            *handle.element_mut(0) = 1;
            assert_eq!(*handle.element(0), 1);
        }

        assert_eq!(data, [1, 9]);
    }
}
