//! Canned WDTE examples shown in the Examples menu.

/// One entry of the Examples menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub id: &'static str,
    pub name: &'static str,
    /// Markdown shown in the description pane.
    pub description: &'static str,
    pub input: &'static str,
}

/// Program loaded when the page has no share fragment.
pub const DEFAULT_PROGRAM: &str = "io.stdout -> io.writeln 'Greetings, pocket universe.';";

/// Description shown before any example is picked.
pub const INTRODUCTION: &str = r#"Introduction
============

Welcome to the WDTE playground, a browser based evaluation environment for WDTE. This playground's features includes the standard function set as well as a number of importable modules.

If you have never seen WDTE before and are completely confused at the moment, try reading the overview on the WDTE project's wiki: https://github.com/DeedleFake/wdte/wiki

Fun Fact
--------

The WDTE interpreter has been compiled to WebAssembly for this playground, meaning that, by opening this page, you've downloaded the entire system. Congratulations.

Documentation
-------------

For documentation on the standard function set, see https://godoc.org/github.com/DeedleFake/wdte/std

The standard library is available for importing, with the exception of the `io/file` module. The `io` module is pre-inserted into the initial scope as `io`. There is also a `playground` module which provides interaction with the playground. It is detailed below.

Playground Module
-----------------

#### wdteVersion
    wdteVersion
Returns the version of WDTE that the playground is using.

#### goVersion
    goVersion
Returns the version of Go that the playground was built with."#;

pub const EXAMPLES: &[Example] = &[
    Example {
        id: "fib",
        name: "Fibonacci",
        description: "Fibonacci\n=========\n\n\
            This example provides a memoized implementation of a recursive Fibonacci number \
            generator. It also provides a recursive factorial function for the heck of it.",
        input: r#"let (memo) fib n => n {>= 2 => + (fib (- n 1)) (fib (- n 2))};

let ! n => n {
	<= 1 => 1;
	true => - n 1 -> ! -> * n;
};

fib 30
-- io.writeln io.stdout
-> / 5
-- io.writeln io.stdout
;"#,
    },
    Example {
        id: "fibLike",
        name: "Fibonacci-Like Sequence",
        description: "Fibonacci-Like Sequence\n=======================\n\n\
            This example determines whether a sequence is similar to a Fibonacci sequence: \
            every value, starting from the third, is the sum of the previous two. It defines \
            a few helpers along the way.\n\n\
            pop\n---\n\n\
            Takes an array and returns a copy without its first element.\n\n\
            windows\n-------\n\n\
            Takes a stream and a size and yields a moving window across the stream as arrays \
            of that size. If a stream yields 1, then 2, then 3, windows of size 2 yield \
            `[1; 2]` and then `[2; 3]`.\n\n\
            isFibLike\n---------\n\n\
            Takes either a stream or an array and returns true if that sequence is \
            Fibonacci-like.",
        input: r#"let s => import 'stream';
let a => import 'arrays';

let pop array => a.stream array -> s.skip 1 -> s.collect;

let method windows stream size => s.new
		(stream -> s.limit size -> s.collect)
		(@ next prev =>
			let n => stream -> s.limit 1 -> s.collect;
			len n {
				== 0 => s.end;
				true => a.concat (pop prev) n;
			};
		)
	;

let isFibLike stream => stream {
	reflect "Array" => a.stream stream -> isFibLike;
	true => stream
		-> windows 3
		-> s.all (@ all [p1 p2 n] => == n (+ p1 p2))
		;
	};

[1; 1; 2; 3; 5; 8]
-> isFibLike
-- io.writeln io.stdout
;"#,
    },
    Example {
        id: "stream",
        name: "Stream",
        description: "Stream\n======\n\n\
            This example demonstrates the `stream` module. This module provides functional \
            iterator operations, such as map, reduce, and filter.\n\n\
            For a full list of functions, see \
            [the godocs](https://www.godoc.org/github.com/DeedleFake/wdte/std/stream).",
        input: r#"let m => import 'math';
let s => import 'stream';

io.writeln io.stdout 'Map and filter:';
s.range 0 (* m.pi 2) (/ m.pi 2)
-> s.map m.sin
-> s.filter (>= 0)
-> s.map (io.writeln io.stdout)
-> s.drain
;

io.writeln io.stdout 'Reduce:';
s.range 1 5
-> s.reduce 1 *
-- io.writeln io.stdout
;"#,
    },
    Example {
        id: "strings",
        name: "Strings",
        description: "Strings\n=======\n\n\
            This example demonstrates the `strings` module. This module provides basic string \
            operations, such as finding the index of a substring, as well as more complicated \
            operations, such as formatting.\n\n\
            For a full list of functions, including an explanation of the formatting system, \
            see [the godocs](https://www.godoc.org/github.com/DeedleFake/wdte/std/strings).",
        input: r#"let a => import 'arrays';
let s => import 'stream';
let str => import 'strings';

a.stream ['abc'; 'bcd'; 'cde']
-> s.map (str.index 'cd')
-> s.collect
-- io.writeln io.stdout
;

'This is the type of English up with which I will not put.'
-> str.format '{q}'
-- io.writeln io.stdout
;"#,
    },
    Example {
        id: "lambdas",
        name: "Lambdas",
        description: "Lambdas\n=======\n\n\
            This example demonstrates lambdas by implementing an iterative Fibonacci number \
            calculator using streams.",
        input: r#"let s => import 'stream';
let a => import 'arrays';

let fib n => s.range 1 n
	-> s.reduce [0; 1] (@ self [a b] n => [
		b;
		+ a b;
	])
	-> at 1
	;

fib 30
-- io.writeln io.stdout
;"#,
    },
    Example {
        id: "quine",
        name: "Quine",
        description: "Quine\n=====\n\nThis example is an implementation of a quine. That's about it.",
        input: r#"let str => import 'strings';
let q => "let str => import 'strings';\nlet q => {q};\nstr.format q q -- io.writeln io.stdout;";
str.format q q -- io.writeln io.stdout;"#,
    },
    Example {
        id: "hundredDoors",
        name: "100 Doors",
        description: "100 Doors\n=========\n\n\
            The [100 doors problem](https://www.rosettacode.org/wiki/100_doors), as presented \
            by Rosetta Code: there are 100 doors that are all closed. You walk past the doors \
            100 times. On the first pass, you toggle every door. On the second pass, you toggle \
            every second door. On the third you toggle every third door. Etc.\n\n\
            This example simulates this scenario, printing out the final state of the doors.",
        input: r#"let a => import 'arrays';
let s => import 'stream';
let str => import 'strings';

let toggle doors m =>
	a.stream doors
	-> s.enumerate
	-> s.map (@ s [i v] => [+ i 1; v])
	-> s.map (@ s [i v] => % i m {
			== 0 => ! v;
			true => v;
		})
	-> s.collect
	;

s.range 100
-> s.map false
-> s.collect : doors
-> s.range 1 100
-> s.reduce doors toggle
-> a.stream
-> s.enumerate
-> s.map (@ s [i v] =>
		0 {
			v => 'Open';
			true => 'Closed';
		}
		-> str.format '{}: {}' (+ i 1)
		-- io.writeln io.stdout;
	)
-> s.drain
;"#,
    },
];

/// Look up an example by its menu id.
pub fn find(id: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = EXAMPLES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), EXAMPLES.len());
    }

    #[test]
    fn test_declaration_order() {
        let names: Vec<_> = EXAMPLES.iter().map(|e| e.name).collect();
        assert_eq!(names.first(), Some(&"Fibonacci"));
        assert_eq!(names.last(), Some(&"100 Doors"));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("quine").map(|e| e.name), Some("Quine"));
        assert!(find("canvas").is_none());
    }

    #[test]
    fn test_quine_keeps_escaped_newlines() {
        let quine = find("quine").unwrap();
        assert!(quine.input.contains(r"\nlet q => {q};\n"));
    }

    #[test]
    fn test_introduction_sections() {
        let headings: Vec<_> = INTRODUCTION
            .lines()
            .zip(INTRODUCTION.lines().skip(1))
            .filter(|(_, underline)| underline.starts_with("==") || underline.starts_with("--"))
            .map(|(heading, _)| heading)
            .collect();
        assert_eq!(
            headings,
            ["Introduction", "Fun Fact", "Documentation", "Playground Module"]
        );
        assert!(INTRODUCTION.ends_with("Returns the version of Go that the playground was built with."));
    }
}
