use crate::body::{self, ResponseBody};
use crate::redir::Table;
use http::request::Parts;
use hyper::header::{HeaderValue, LOCATION};
use hyper::{Response, StatusCode};

/// Anything that can answer a request. Resolvers hold a boxed fallback
/// behind this trait, so chains nest to arbitrary depth and terminate
/// at a plain responder like [`Hello`].
pub trait Handler: Send + Sync {
    fn handle(&self, req: &Parts) -> Response<ResponseBody>;
}

/// Looks the request path up in a redirect table; on a miss, delegates
/// to the fallback handler with the request unchanged.
pub struct Resolver {
    table: Table,
    fallback: Box<dyn Handler>,
}

impl Resolver {
    pub fn new(table: Table, fallback: Box<dyn Handler>) -> Self {
        Self { table, fallback }
    }
}

impl Handler for Resolver {
    fn handle(&self, req: &Parts) -> Response<ResponseBody> {
        match self.table.lookup(req.uri.path()) {
            Some(url) => match HeaderValue::from_str(url) {
                Ok(location) => {
                    log::info!("{} -> {}", req.uri, url);
                    let mut resp = Response::new(body::empty());
                    *resp.status_mut() = StatusCode::FOUND;
                    resp.headers_mut().insert(LOCATION, location);
                    resp
                }
                Err(e) => {
                    log::warn!("{} -> [invalid target] {:?} : {}", req.uri, url, e);
                    let mut resp = Response::new(body::empty());
                    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    resp
                }
            },
            None => {
                log::debug!("{} -> [fallback]", req.uri);
                self.fallback.handle(req)
            }
        }
    }
}

/// Terminal handler: greets every request.
pub struct Hello;

impl Handler for Hello {
    fn handle(&self, req: &Parts) -> Response<ResponseBody> {
        log::info!("{} -> [hello]", req.uri);
        Response::new(body::full("Hello, world!\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redir::Route;
    use http_body_util::BodyExt;
    use hyper::Request;

    fn parts(path: &str) -> Parts {
        Request::builder()
            .uri(path)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    fn table(routes: &[(&str, &str)]) -> Table {
        Table::build(routes.iter().map(|(path, url)| Route {
            path: path.to_string(),
            url: url.to_string(),
        }))
    }

    async fn body_text(resp: Response<ResponseBody>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn match_redirects_without_touching_the_fallback() {
        let resolver = Resolver::new(
            table(&[("/urlshort", "https://github.com/gophercises/urlshort")]),
            Box::new(Hello),
        );

        let resp = resolver.handle(&parts("/urlshort"));
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(LOCATION).unwrap(),
            "https://github.com/gophercises/urlshort"
        );
        assert_eq!(body_text(resp).await, "");
    }

    #[tokio::test]
    async fn miss_falls_through_to_hello() {
        let resolver = Resolver::new(
            table(&[("/urlshort", "https://github.com/gophercises/urlshort")]),
            Box::new(Hello),
        );

        let resp = resolver.handle(&parts("/unknown"));
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(LOCATION).is_none());
        assert_eq!(body_text(resp).await, "Hello, world!\n");
    }

    #[test]
    fn chains_consult_outer_table_first() {
        let inner = Resolver::new(table(&[("/both", "http://inner")]), Box::new(Hello));
        let outer = Resolver::new(
            table(&[("/both", "http://outer"), ("/outer", "http://o")]),
            Box::new(inner),
        );

        let resp = outer.handle(&parts("/both"));
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "http://outer");
    }

    #[test]
    fn chains_fall_through_to_inner_table() {
        let inner = Resolver::new(table(&[("/inner", "http://i")]), Box::new(Hello));
        let outer = Resolver::new(table(&[("/outer", "http://o")]), Box::new(inner));

        let resp = outer.handle(&parts("/inner"));
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "http://i");
    }

    #[test]
    fn unheaderable_target_is_an_internal_error() {
        let resolver = Resolver::new(table(&[("/bad", "http://x\ny")]), Box::new(Hello));

        let resp = resolver.handle(&parts("/bad"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().get(LOCATION).is_none());
    }
}
