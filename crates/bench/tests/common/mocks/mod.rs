//! Hand-written mocks for the backend seam.
