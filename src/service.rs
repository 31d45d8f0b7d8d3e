use alloc::boxed::Box;

use crate::utils::thread_safety::{SendSafety, SyncSafety};

pub(crate) trait Service<Request> {
    type Response;
    type Error;

    fn call(&self, request: Request) -> Result<Self::Response, Self::Error>;
}

#[inline]
#[must_use]
pub(crate) const fn service_fn<T>(f: T) -> ServiceFn<T> {
    ServiceFn { f }
}

#[derive(Clone)]
pub(crate) struct ServiceFn<T> {
    f: T,
}

impl<F, Request, Response, Error> Service<Request> for ServiceFn<F>
where
    F: Fn(Request) -> Result<Response, Error>,
{
    type Response = Response;
    type Error = Error;

    #[inline]
    fn call(&self, request: Request) -> Result<Self::Response, Self::Error> {
        (self.f)(request)
    }
}

#[cfg(feature = "thread_safe")]
pub(crate) type BoxServiceInner<Request, Response, Error> = Box<dyn Service<Request, Response = Response, Error = Error> + Send + Sync>;

#[cfg(not(feature = "thread_safe"))]
pub(crate) type BoxServiceInner<Request, Response, Error> = Box<dyn Service<Request, Response = Response, Error = Error>>;

pub(crate) struct BoxService<Request, Response, Error>(pub(crate) BoxServiceInner<Request, Response, Error>);

impl<Request, Response, Error> BoxService<Request, Response, Error> {
    #[inline]
    pub(crate) fn new<S>(inner: S) -> Self
    where
        S: Service<Request, Response = Response, Error = Error> + SendSafety + SyncSafety + 'static,
    {
        Self(Box::new(inner))
    }
}

impl<Request, Response, Error> Service<Request> for BoxService<Request, Response, Error> {
    type Response = Response;
    type Error = Error;

    #[inline]
    fn call(&self, request: Request) -> Result<Self::Response, Self::Error> {
        self.0.call(request)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::{service_fn, BoxService, Service as _};

    #[derive(Clone, Copy)]
    struct Request(bool);
    struct Response(bool);

    #[test]
    fn test_service() {
        let service = service_fn(|Request(val)| Ok::<_, Infallible>(Response(val)));

        let request = Request(true);
        let response = service.call(request).unwrap();

        assert_eq!(request.0, response.0);
    }

    #[test]
    fn test_boxed_service() {
        let service = BoxService::new(service_fn(|Request(val)| Ok::<_, Infallible>(Response(!val))));

        assert!(!service.call(Request(true)).unwrap().0);
        assert!(service.call(Request(false)).unwrap().0);
    }
}
